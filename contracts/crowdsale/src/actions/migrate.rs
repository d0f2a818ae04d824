use cosmwasm_std::{DepsMut, Env, Response};
use cw2::{get_contract_version, set_contract_version};

use semver::Version;

use crowdsale_base::crowdsale::{msg::MigrateMsg, state::CONTRACT_NAME};

use crate::error::ContractError;

pub fn migrate_contract(
    deps: DepsMut,
    _env: Env,
    msg: MigrateMsg,
) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;

    if stored.contract != CONTRACT_NAME {
        Err(ContractError::ContractNameErr(stored.contract))?;
    }

    let version_previous: Version = stored.version.parse()?;
    let version_new: Version = msg.version.parse()?;

    if version_new < version_previous {
        Err(ContractError::VersionErr(version_previous.to_string()))?;
    }

    set_contract_version(deps.storage, CONTRACT_NAME, version_new.to_string())?;

    Ok(Response::new())
}

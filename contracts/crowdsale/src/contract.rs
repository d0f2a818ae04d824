#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};

use crowdsale_base::crowdsale::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

use crate::{
    actions::{
        execute as e, instantiate::try_instantiate, migrate::migrate_contract, query as q,
    },
    error::ContractError,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Contribute {} => e::try_contribute(deps, env, info),

        ExecuteMsg::Transfer { recipient, amount } => {
            e::try_transfer(deps, env, info, recipient, amount)
        }

        ExecuteMsg::Burn { amount } => e::try_burn(deps, env, info, amount),

        ExecuteMsg::SetIcoDates { start, end } => e::try_set_ico_dates(deps, env, info, start, end),

        ExecuteMsg::HaltFundraising {} => e::try_halt_fundraising(deps, env, info),

        ExecuteMsg::UnhaltFundraising {} => e::try_unhalt_fundraising(deps, env, info),

        ExecuteMsg::Unpause {} => e::try_unpause(deps, env, info),

        ExecuteMsg::ManuallyAssignTokens { recipient, amount } => {
            e::try_manually_assign_tokens(deps, env, info, recipient, amount)
        }

        ExecuteMsg::PrepareLiquidityReserve {} => e::try_prepare_liquidity_reserve(deps, env, info),

        ExecuteMsg::UpdateOwner { new_owner } => e::try_update_owner(deps, env, info, new_owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&q::query_config(deps, env)?),

        QueryMsg::SaleState {} => to_json_binary(&q::query_sale_state(deps, env)?),

        QueryMsg::Balance { address } => to_json_binary(&q::query_balance(deps, env, address)?),

        QueryMsg::Owner {} => to_json_binary(&q::query_owner(deps, env)?),

        QueryMsg::IcoDates {} => to_json_binary(&q::query_ico_dates(deps, env)?),

        QueryMsg::Phase {} => to_json_binary(&q::query_phase(deps, env)?),

        QueryMsg::IsIcoFinished {} => to_json_binary(&q::query_is_ico_finished(deps, env)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}

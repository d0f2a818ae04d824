use cosmwasm_std::{Addr, Deps, Env, StdResult, Uint128};

use crowdsale_base::crowdsale::{
    state::{BALANCES, CONFIG, ICO_DATES, OWNER, SALE_STATE},
    types::{Config, IcoDates, Phase, SaleState},
};

use crate::math;

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_sale_state(deps: Deps, _env: Env) -> StdResult<SaleState> {
    SALE_STATE.load(deps.storage)
}

pub fn query_balance(deps: Deps, _env: Env, address: String) -> StdResult<Uint128> {
    let address = deps.api.addr_validate(&address)?;

    Ok(BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default())
}

pub fn query_owner(deps: Deps, _env: Env) -> StdResult<Option<Addr>> {
    OWNER.get(deps)
}

/// reports zeros until the owner sets the window
pub fn query_ico_dates(deps: Deps, _env: Env) -> StdResult<IcoDates> {
    Ok(ICO_DATES
        .may_load(deps.storage)?
        .unwrap_or(IcoDates { start: 0, end: 0 }))
}

pub fn query_phase(deps: Deps, env: Env) -> StdResult<Phase> {
    let config = CONFIG.load(deps.storage)?;
    let state = SALE_STATE.load(deps.storage)?;
    let ico_dates = ICO_DATES.may_load(deps.storage)?;

    Ok(math::calc_phase(
        env.block.time.seconds(),
        &config,
        ico_dates.as_ref(),
        state.total_raised,
    ))
}

pub fn query_is_ico_finished(deps: Deps, env: Env) -> StdResult<bool> {
    Ok(query_phase(deps, env)? == Phase::Finished)
}

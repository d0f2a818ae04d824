use cosmwasm_std::{DepsMut, Env, MessageInfo, OverflowError, OverflowOperation, Response, Uint128};
use cw2::set_contract_version;

use crowdsale_base::crowdsale::{
    msg::InstantiateMsg,
    state::{
        BALANCES, CONFIG, CONTRACT_NAME, DEFAULT_EXCHANGE_RATE, MARKETING_POOL_DIVISOR, OWNER,
        PRESALE_DURATION, SALE_STATE,
    },
    types::{Config, SaleState},
};

use crate::error::ContractError;

const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn try_instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    OWNER.set(deps.branch(), Some(info.sender))?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let exchange_rate = msg
        .exchange_rate
        .unwrap_or(Uint128::new(DEFAULT_EXCHANGE_RATE));

    let presale_end = msg.presale_start.checked_add(PRESALE_DURATION).ok_or(
        OverflowError::new(OverflowOperation::Add, msg.presale_start, PRESALE_DURATION),
    )?;

    let config = Config {
        wallet: deps.api.addr_validate(&msg.wallet)?,
        marketing: deps.api.addr_validate(&msg.marketing)?,
        liquidity: deps.api.addr_validate(&msg.liquidity)?,
        fund_denom: msg.fund_denom,
        exchange_rate,
        min_cap: msg.min_cap,
        max_cap: msg.max_cap,
        presale_start: msg.presale_start,
        presale_end,
    };

    // one-shot marketing pool mint, never repeatable after instantiation
    let marketing_pool =
        config.max_cap.checked_mul(exchange_rate)? / Uint128::new(MARKETING_POOL_DIVISOR);

    BALANCES.save(deps.storage, &config.marketing, &marketing_pool)?;

    SALE_STATE.save(
        deps.storage,
        &SaleState {
            total_raised: msg.total_presale_raised,
            total_supply: marketing_pool,
            tokens_sold: marketing_pool,
            is_halted: false,
            // transfers stay locked until the owner unpauses
            is_paused: true,
            liquidity_reserve_assigned: false,
        },
    )?;

    CONFIG.save(deps.storage, &config)?;

    let marketing_pool = marketing_pool.to_string();

    Ok(Response::new().add_attributes([
        ("action", "try_instantiate"),
        ("mint_to", config.marketing.as_str()),
        ("mint_amount", marketing_pool.as_str()),
    ]))
}

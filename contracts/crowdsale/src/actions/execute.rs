use cosmwasm_std::{
    coins, ensure, Addr, BankMsg, CosmosMsg, DepsMut, Env, MessageInfo, Response, Storage, Uint128,
};
use cw_utils::{may_pay, nonpayable};

use crowdsale_base::crowdsale::{
    state::{BALANCES, CONFIG, ICO_DATES, LIQUIDITY_RESERVE_DIVISOR, OWNER, SALE_STATE},
    types::{IcoDates, Phase, SaleState},
};

use crate::{error::ContractError, math};

/// Credits freshly issued tokens to a holder and records them as sold.
/// Burns never go through here, tokens_sold only ever grows.
fn mint_sold(
    storage: &mut dyn Storage,
    state: &mut SaleState,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    BALANCES.update(storage, to, |balance| -> Result<Uint128, ContractError> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;

    state.total_supply = state.total_supply.checked_add(amount)?;
    state.tokens_sold = state.tokens_sold.checked_add(amount)?;

    Ok(())
}

fn decrease_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance = BALANCES
        .may_load(storage, from)?
        .unwrap_or_default()
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {})?;

    BALANCES.save(storage, from, &balance)?;

    Ok(())
}

pub fn try_contribute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = SALE_STATE.load(deps.storage)?;

    ensure!(!state.is_halted, ContractError::FundraisingHalted {});

    let block_time = env.block.time.seconds();
    let ico_dates = ICO_DATES.may_load(deps.storage)?;
    let phase = math::calc_phase(block_time, &config, ico_dates.as_ref(), state.total_raised);

    match phase {
        Phase::Presale | Phase::Ico => {}
        // the sale closed by exhausting the cap, report the cap itself
        Phase::Finished if state.total_raised >= config.max_cap => {
            Err(ContractError::MaxCapExceeded {})?
        }
        _ => Err(ContractError::SaleNotInProgress {})?,
    }

    let amount = may_pay(&info, &config.fund_denom)?;
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});

    // closed upper bound, reaching the cap exactly is accepted,
    // anything above is rejected in full
    let total_raised = state.total_raised.checked_add(amount)?;
    ensure!(
        total_raised <= config.max_cap,
        ContractError::MaxCapExceeded {}
    );

    let base_tokens = amount.checked_mul(config.exchange_rate)?;
    let tokens = match phase {
        Phase::Presale => {
            math::apply_presale_bonus(base_tokens, block_time - config.presale_start)?
        }
        _ => base_tokens,
    };

    state.total_raised = total_raised;
    mint_sold(deps.storage, &mut state, &info.sender, tokens)?;
    SALE_STATE.save(deps.storage, &state)?;

    // the contract never custodies funds, everything goes to the wallet
    let msg = CosmosMsg::Bank(BankMsg::Send {
        to_address: config.wallet.to_string(),
        amount: coins(amount.u128(), config.fund_denom),
    });

    let fund_amount = amount.to_string();
    let tokens_issued = tokens.to_string();

    Ok(Response::new().add_message(msg).add_attributes([
        ("action", "try_contribute"),
        ("contributor", info.sender.as_str()),
        ("fund_amount", fund_amount.as_str()),
        ("tokens_issued", tokens_issued.as_str()),
        ("mint_to", info.sender.as_str()),
        ("mint_amount", tokens_issued.as_str()),
    ]))
}

pub fn try_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let state = SALE_STATE.load(deps.storage)?;
    ensure!(!state.is_paused, ContractError::TransfersPaused {});

    let recipient = deps.api.addr_validate(&recipient)?;

    decrease_balance(deps.storage, &info.sender, amount)?;
    BALANCES.update(
        deps.storage,
        &recipient,
        |balance| -> Result<Uint128, ContractError> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        },
    )?;

    let amount = amount.to_string();

    Ok(Response::new().add_attributes([
        ("action", "try_transfer"),
        ("from", info.sender.as_str()),
        ("to", recipient.as_str()),
        ("amount", amount.as_str()),
    ]))
}

pub fn try_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let mut state = SALE_STATE.load(deps.storage)?;
    ensure!(!state.is_paused, ContractError::TransfersPaused {});

    decrease_balance(deps.storage, &info.sender, amount)?;

    // burning reduces outstanding supply but not the historical sold counter
    state.total_supply = state
        .total_supply
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {})?;
    SALE_STATE.save(deps.storage, &state)?;

    let amount = amount.to_string();

    Ok(Response::new().add_attributes([
        ("action", "try_burn"),
        ("from", info.sender.as_str()),
        ("amount", amount.as_str()),
    ]))
}

pub fn try_set_ico_dates(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    start: u64,
    end: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    // no validation against elapsed time, the owner may date the window
    // partly or fully in the past
    ICO_DATES.save(deps.storage, &IcoDates { start, end })?;

    let start = start.to_string();
    let end = end.to_string();

    Ok(Response::new().add_attributes([
        ("action", "try_set_ico_dates"),
        ("ico_start", start.as_str()),
        ("ico_end", end.as_str()),
    ]))
}

pub fn try_halt_fundraising(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    SALE_STATE.update(deps.storage, |mut state| -> Result<_, ContractError> {
        state.is_halted = true;

        Ok(state)
    })?;

    Ok(Response::new().add_attributes([("action", "try_halt_fundraising")]))
}

pub fn try_unhalt_fundraising(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    SALE_STATE.update(deps.storage, |mut state| -> Result<_, ContractError> {
        state.is_halted = false;

        Ok(state)
    })?;

    Ok(Response::new().add_attributes([("action", "try_unhalt_fundraising")]))
}

pub fn try_unpause(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    SALE_STATE.update(deps.storage, |mut state| -> Result<_, ContractError> {
        state.is_paused = false;

        Ok(state)
    })?;

    Ok(Response::new().add_attributes([("action", "try_unpause")]))
}

pub fn try_manually_assign_tokens(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let mut state = SALE_STATE.load(deps.storage)?;

    // credits legacy off-chain presale deals, total_raised is untouched
    mint_sold(deps.storage, &mut state, &recipient, amount)?;
    SALE_STATE.save(deps.storage, &state)?;

    let amount = amount.to_string();

    Ok(Response::new().add_attributes([
        ("action", "try_manually_assign_tokens"),
        ("mint_to", recipient.as_str()),
        ("mint_amount", amount.as_str()),
    ]))
}

pub fn try_prepare_liquidity_reserve(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let mut state = SALE_STATE.load(deps.storage)?;

    ensure!(
        !state.liquidity_reserve_assigned,
        ContractError::LiquidityReserveAlreadyAssigned {}
    );

    let block_time = env.block.time.seconds();
    let ico_dates = ICO_DATES.may_load(deps.storage)?;
    let phase = math::calc_phase(block_time, &config, ico_dates.as_ref(), state.total_raised);

    match phase {
        Phase::Finished => {}
        _ => Err(ContractError::IcoNotFinished {})?,
    }

    // sized against whatever has been sold by the moment of the call
    let reserve = state.tokens_sold / Uint128::new(LIQUIDITY_RESERVE_DIVISOR);

    mint_sold(deps.storage, &mut state, &config.liquidity, reserve)?;
    state.liquidity_reserve_assigned = true;
    SALE_STATE.save(deps.storage, &state)?;

    let reserve = reserve.to_string();

    Ok(Response::new().add_attributes([
        ("action", "try_prepare_liquidity_reserve"),
        ("mint_to", config.liquidity.as_str()),
        ("mint_amount", reserve.as_str()),
    ]))
}

pub fn try_update_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let new_owner = deps.api.addr_validate(&new_owner)?;

    Ok(OWNER.execute_update_admin(deps, info, Some(new_owner))?)
}

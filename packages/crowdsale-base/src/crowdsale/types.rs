use cosmwasm_schema::cw_serde;

use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct Config {
    // Destination for contributed funds, forwarded on every purchase
    pub wallet: Addr,
    // Destination for the one-shot marketing pool mint
    pub marketing: Addr,
    // Destination for the one-shot post-sale liquidity reserve mint
    pub liquidity: Addr,
    // Native denom accepted for contributions
    pub fund_denom: String,
    // Tokens issued per unit of fund currency, before presale bonus
    pub exchange_rate: Uint128,
    // Fundraising succeeds once total_raised reaches min_cap
    pub min_cap: Uint128,
    // Cumulative contributions never exceed max_cap
    pub max_cap: Uint128,
    // Presale window, end = start + PRESALE_DURATION
    pub presale_start: u64,
    pub presale_end: u64,
}

/// ICO window, unset until the owner configures it. Setting it again
/// replaces the previous window, last call wins.
#[cw_serde]
pub struct IcoDates {
    pub start: u64,
    pub end: u64,
}

#[derive(Default)]
#[cw_serde]
pub struct SaleState {
    // Cumulative fund currency accepted, including the off-chain presale seed
    pub total_raised: Uint128,
    // Tokens currently outstanding, equals the sum of all balances
    pub total_supply: Uint128,
    // Monotonic counter of tokens ever issued through sale/allocation paths,
    // never reduced by burns
    pub tokens_sold: Uint128,
    // Blocks new contributions
    pub is_halted: bool,
    // Blocks transfers and burns, starts true, cleared once by the owner
    pub is_paused: bool,
    pub liquidity_reserve_assigned: bool,
}

#[cw_serde]
#[derive(Copy)]
pub enum Phase {
    NotStarted,
    Presale,
    Ico,
    Finished,
}

use cosmwasm_schema::{cw_serde, QueryResponses};

use cosmwasm_std::{Addr, Uint128};

use crate::crowdsale::types::{Config, IcoDates, Phase, SaleState};

#[cw_serde]
pub struct MigrateMsg {
    pub version: String,
}

#[cw_serde]
pub struct InstantiateMsg {
    // Destination for contributed funds
    pub wallet: String,
    // Destination for the marketing pool
    pub marketing: String,
    // Destination for the post-sale liquidity reserve
    pub liquidity: String,
    // Native denom accepted for contributions
    pub fund_denom: String,
    pub min_cap: Uint128,
    pub max_cap: Uint128,
    // Presale window start, the end is fixed 28 days later
    pub presale_start: u64,
    // Amount raised in an earlier off-chain presale, seeds total_raised
    pub total_presale_raised: Uint128,
    // Tokens per unit of fund currency, defaults to DEFAULT_EXCHANGE_RATE
    pub exchange_rate: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // user
    /// Exchange attached funds for tokens at the current phase's rate
    Contribute {},

    /// Move tokens to another holder, blocked while paused
    Transfer { recipient: String, amount: Uint128 },

    /// Destroy sender's tokens reducing total supply, blocked while paused
    Burn { amount: Uint128 },

    // owner
    /// Set or replace the ICO window, last call wins
    SetIcoDates { start: u64, end: u64 },

    /// Stop accepting contributions
    HaltFundraising {},

    /// Resume accepting contributions
    UnhaltFundraising {},

    /// Open up token transfers and burns, one-directional
    Unpause {},

    /// Credit tokens sold outside the contract, off-chain presale deals
    ManuallyAssignTokens { recipient: String, amount: Uint128 },

    /// Mint tokens_sold / 10 to the liquidity destination, once,
    /// after the sale is finished
    PrepareLiquidityReserve {},

    /// Hand contract ownership to a new address
    UpdateOwner { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(SaleState)]
    SaleState {},

    #[returns(Uint128)]
    Balance { address: String },

    #[returns(Option<Addr>)]
    Owner {},

    /// zeros until the owner sets the window
    #[returns(IcoDates)]
    IcoDates {},

    #[returns(Phase)]
    Phase {},

    #[returns(bool)]
    IsIcoFinished {},
}

use cosmwasm_std::{Addr, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

use crate::crowdsale::types::{Config, IcoDates, SaleState};

pub const CONTRACT_NAME: &str = "crowdsale";

pub const SECONDS_PER_DAY: u64 = 24 * 3600;

/// The presale window is fixed at 28 days from presale_start
pub const PRESALE_DURATION: u64 = 28 * SECONDS_PER_DAY;

/// Presale bonus tiers as (elapsed upper bound in seconds, bonus percent).
/// Elapsed time below the bound and at or above the previous bound earns
/// the tier's bonus on top of the base exchange rate.
pub const PRESALE_BONUS_SCHEDULE: [(u64, u128); 5] = [
    (2 * SECONDS_PER_DAY, 25),
    (7 * SECONDS_PER_DAY, 20),
    (14 * SECONDS_PER_DAY, 15),
    (21 * SECONDS_PER_DAY, 10),
    (28 * SECONDS_PER_DAY, 5),
];

pub const DEFAULT_EXCHANGE_RATE: u128 = 450;

/// marketing_pool = max_cap * exchange_rate / MARKETING_POOL_DIVISOR,
/// minted once at instantiation
pub const MARKETING_POOL_DIVISOR: u128 = 9;

/// liquidity_reserve = tokens_sold / LIQUIDITY_RESERVE_DIVISOR,
/// minted once after the sale is finished
pub const LIQUIDITY_RESERVE_DIVISOR: u128 = 10;

pub const OWNER: Admin = Admin::new("owner");

pub const CONFIG: Item<Config> = Item::new("config");
pub const SALE_STATE: Item<SaleState> = Item::new("sale state");
/// absent until the owner sets the ICO window
pub const ICO_DATES: Item<IcoDates> = Item::new("ico dates");

/// token balance by holder address
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

use cosmwasm_std::{OverflowError, StdError};
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Fundraising is halted")]
    FundraisingHalted {},

    #[error("Sale is not in progress")]
    SaleNotInProgress {},

    #[error("Token amount must not be zero")]
    ZeroAmount {},

    #[error("Contribution exceeds the max cap")]
    MaxCapExceeded {},

    #[error("ICO is not finished")]
    IcoNotFinished {},

    #[error("Liquidity reserve is already assigned")]
    LiquidityReserveAlreadyAssigned {},

    #[error("Insufficient token balance")]
    InsufficientBalance {},

    #[error("Token transfers are paused")]
    TransfersPaused {},

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("New version must be greater than previous one: {0}")]
    VersionErr(String),

    #[error("Contract name must be same: {0}")]
    ContractNameErr(String),
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}

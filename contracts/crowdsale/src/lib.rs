/// Main contract logic
pub mod contract;
/// custom error handler
pub mod error;
/// pure phase and bonus computations
pub mod math;

pub mod actions {
    pub mod execute;
    pub mod instantiate;
    pub mod migrate;
    pub mod query;
}

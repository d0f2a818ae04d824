pub mod crowdsale {
    pub mod msg;
    pub mod state;
    pub mod types;
}

use anyhow::Result as AnyResult;

use cosmwasm_std::{coins, Addr, BlockInfo, Timestamp, Uint128};
use cw_multi_test::{App, AppBuilder, AppResponse, ContractWrapper, Executor};

use crowdsale_base::crowdsale::{
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    types::{Config, IcoDates, Phase, SaleState},
};

pub const CHAIN_ID: &str = "cw-multitest-1";
pub const GENESIS_TIME: u64 = 1_700_000_000;
pub const ONE_HOUR: u64 = 3600;

pub const CREATOR: &str = "creator";
pub const OWNER: &str = "owner";
pub const WALLET: &str = "wallet";
pub const MARKETING: &str = "marketing";
pub const LIQUIDITY: &str = "liquidity";
pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";
pub const ATTACKER: &str = "attacker";

pub const FUND_DENOM: &str = "untrn";
pub const INITIAL_FUND_BALANCE: u128 = 1_000_000;

pub const MIN_CAP: u128 = 8_000;
pub const MAX_CAP: u128 = 120_000;
pub const EXCHANGE_RATE: u128 = 450;

/// attribute value from the wasm events of a response, empty when absent
pub fn get_attribute(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .filter(|event| event.ty == "wasm")
        .flat_map(|event| &event.attributes)
        .find(|attribute| attribute.key == key)
        .map(|attribute| attribute.value.clone())
        .unwrap_or_default()
}

pub struct SuiteBuilder {
    min_cap: u128,
    max_cap: u128,
    presale_start: u64,
    total_presale_raised: u128,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self {
            min_cap: MIN_CAP,
            max_cap: MAX_CAP,
            presale_start: GENESIS_TIME,
            total_presale_raised: 0,
        }
    }

    pub fn with_caps(mut self, min_cap: u128, max_cap: u128) -> Self {
        self.min_cap = min_cap;
        self.max_cap = max_cap;
        self
    }

    pub fn with_presale_start(mut self, presale_start: u64) -> Self {
        self.presale_start = presale_start;
        self
    }

    pub fn with_total_presale_raised(mut self, total_presale_raised: u128) -> Self {
        self.total_presale_raised = total_presale_raised;
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let mut app = AppBuilder::new()
            .with_block(BlockInfo {
                height: 1,
                time: Timestamp::from_seconds(GENESIS_TIME),
                chain_id: CHAIN_ID.to_string(),
            })
            .build(|router, _, storage| {
                for actor in [ALICE, BOB, ATTACKER] {
                    router
                        .bank
                        .init_balance(
                            storage,
                            &Addr::unchecked(actor),
                            coins(INITIAL_FUND_BALANCE, FUND_DENOM),
                        )
                        .unwrap();
                }
            });

        let code_id = app.store_code(Box::new(ContractWrapper::new_with_empty(
            crowdsale::contract::execute,
            crowdsale::contract::instantiate,
            crowdsale::contract::query,
        )));

        let crowdsale_contract = app
            .instantiate_contract(
                code_id,
                Addr::unchecked(CREATOR),
                &InstantiateMsg {
                    wallet: WALLET.to_string(),
                    marketing: MARKETING.to_string(),
                    liquidity: LIQUIDITY.to_string(),
                    fund_denom: FUND_DENOM.to_string(),
                    min_cap: Uint128::new(self.min_cap),
                    max_cap: Uint128::new(self.max_cap),
                    presale_start: self.presale_start,
                    total_presale_raised: Uint128::new(self.total_presale_raised),
                    exchange_rate: None,
                },
                &[],
                "crowdsale",
                Some(CREATOR.to_string()),
            )
            .unwrap();

        let mut suite = Suite {
            app,
            crowdsale_contract,
        };

        // ownership handover, done by the deploy factory in production
        suite.update_owner(CREATOR, OWNER).unwrap();

        suite
    }
}

pub struct Suite {
    pub app: App,
    crowdsale_contract: Addr,
}

impl Suite {
    pub fn crowdsale_contract(&self) -> Addr {
        self.crowdsale_contract.clone()
    }

    pub fn block_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn add_seconds(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += 1;
        });
    }

    // ------------------------------ execute ----------------------------------------

    pub fn contribute(&mut self, sender: &str, amount: u128) -> AnyResult<AppResponse> {
        let funds = if amount == 0 {
            vec![]
        } else {
            coins(amount, FUND_DENOM)
        };

        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::Contribute {},
            &funds,
        )
    }

    pub fn transfer(&mut self, sender: &str, recipient: &str, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn burn(&mut self, sender: &str, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::Burn {
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn set_ico_dates(&mut self, sender: &str, start: u64, end: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::SetIcoDates { start, end },
            &[],
        )
    }

    /// opens an ICO window starting at the current block time
    pub fn start_ico(&mut self, duration: u64) {
        let start = self.block_time();
        self.set_ico_dates(OWNER, start, start + duration).unwrap();
    }

    pub fn halt_fundraising(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::HaltFundraising {},
            &[],
        )
    }

    pub fn unhalt_fundraising(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::UnhaltFundraising {},
            &[],
        )
    }

    pub fn unpause(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::Unpause {},
            &[],
        )
    }

    pub fn manually_assign_tokens(
        &mut self,
        sender: &str,
        recipient: &str,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::ManuallyAssignTokens {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn prepare_liquidity_reserve(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::PrepareLiquidityReserve {},
            &[],
        )
    }

    pub fn update_owner(&mut self, sender: &str, new_owner: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.crowdsale_contract.clone(),
            &ExecuteMsg::UpdateOwner {
                new_owner: new_owner.to_string(),
            },
            &[],
        )
    }

    // ------------------------------ query ----------------------------------------

    pub fn query_config(&self) -> Config {
        self.app
            .wrap()
            .query_wasm_smart(self.crowdsale_contract.clone(), &QueryMsg::Config {})
            .unwrap()
    }

    pub fn query_sale_state(&self) -> SaleState {
        self.app
            .wrap()
            .query_wasm_smart(self.crowdsale_contract.clone(), &QueryMsg::SaleState {})
            .unwrap()
    }

    pub fn query_balance(&self, address: &str) -> u128 {
        let balance: Uint128 = self
            .app
            .wrap()
            .query_wasm_smart(
                self.crowdsale_contract.clone(),
                &QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();

        balance.u128()
    }

    pub fn query_owner(&self) -> Option<Addr> {
        self.app
            .wrap()
            .query_wasm_smart(self.crowdsale_contract.clone(), &QueryMsg::Owner {})
            .unwrap()
    }

    pub fn query_ico_dates(&self) -> IcoDates {
        self.app
            .wrap()
            .query_wasm_smart(self.crowdsale_contract.clone(), &QueryMsg::IcoDates {})
            .unwrap()
    }

    pub fn query_phase(&self) -> Phase {
        self.app
            .wrap()
            .query_wasm_smart(self.crowdsale_contract.clone(), &QueryMsg::Phase {})
            .unwrap()
    }

    pub fn query_is_ico_finished(&self) -> bool {
        self.app
            .wrap()
            .query_wasm_smart(self.crowdsale_contract.clone(), &QueryMsg::IsIcoFinished {})
            .unwrap()
    }

    pub fn query_fund_balance(&self, address: &str) -> u128 {
        self.app
            .wrap()
            .query_balance(Addr::unchecked(address), FUND_DENOM)
            .unwrap()
            .amount
            .u128()
    }

    /// total_supply must equal the sum of balances over every actor
    pub fn assert_supply_matches_balances(&self) {
        let holders = [
            CREATOR, OWNER, WALLET, MARKETING, LIQUIDITY, ALICE, BOB, ATTACKER,
        ];
        let sum: u128 = holders.iter().map(|addr| self.query_balance(addr)).sum();

        assert_eq!(self.query_sale_state().total_supply.u128(), sum);
    }
}

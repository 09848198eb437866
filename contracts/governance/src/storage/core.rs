use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const BUMP_THRESHOLD: u32 = DAY_IN_LEDGERS;
pub const BUMP_AMOUNT: u32 = DAY_IN_LEDGERS * 30;

pub const DEFAULT_VOTING_POWER: u128 = 100;

/// Upper bound for the voting power of a single member
pub const MAX_VOTING_POWER: u128 = 1_000_000_000_000_000_000_000_000;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CoreState {
    pub admin: Address,

    /// Every fee is sent to this address
    pub treasury: Address,

    /// The Stellar Asset Contract of the native asset (XLM)
    pub fee_asset: Address,

    // Fees are expressed in stroops, for example 10 XLM = 10_0000000
    pub registration_fee: u128,
    pub proposal_fee: u128,
    pub vote_fee: u128,

    pub default_voting_power: u128,
}

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GovernanceStats {
    /// Members ever admitted, also the position of the last one in the members index
    pub members: u64,
    pub proposals: u64,

    // Sum of the voting power of the active members
    pub total_voting_power: u128,
}

#[contracttype]
pub enum CoreStorageKeys {
    CoreState,
    Stats,
}

pub trait CoreStorageFunc {
    fn _bump_instance(&self);
    fn _core_state(&self) -> Option<CoreState>;
    fn _set_core_state(&self, v: &CoreState);
    fn _stats(&self) -> GovernanceStats;
    fn _set_stats(&self, v: &GovernanceStats);
}

impl CoreStorageFunc for Env {
    fn _bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    fn _core_state(&self) -> Option<CoreState> {
        self.storage().instance().get(&CoreStorageKeys::CoreState)
    }

    fn _set_core_state(&self, v: &CoreState) {
        self.storage()
            .instance()
            .set(&CoreStorageKeys::CoreState, v);
    }

    fn _stats(&self) -> GovernanceStats {
        self.storage()
            .instance()
            .get(&CoreStorageKeys::Stats)
            .unwrap_or_default()
    }

    fn _set_stats(&self, v: &GovernanceStats) {
        self.storage().instance().set(&CoreStorageKeys::Stats, v);
    }
}

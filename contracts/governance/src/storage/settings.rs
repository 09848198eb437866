use soroban_sdk::{contracttype, Env};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TallyPolicy {
    /// A proposal whose voting window elapses while Active is always Failed
    ExpireAsFailed,

    /// At expiry the proposal Passes when quorum is met and there are more votes for than against
    QuorumMajority,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceSettings {
    /// Percentage (0 to 100) of the total voting power that must take part in a vote
    pub quorum: u32,

    // Durations are in seconds
    pub voting_period: u64,
    pub voting_delay: u64,
    pub execution_delay: u64,

    /// Minimum voting power a member needs to create a proposal
    pub proposal_threshold: u128,

    pub tally_policy: TallyPolicy,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SettingsUpdate {
    pub quorum: Option<u32>,
    pub voting_period: Option<u64>,
    pub voting_delay: Option<u64>,
    pub execution_delay: Option<u64>,
    pub proposal_threshold: Option<u128>,
}

impl GovernanceSettings {
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(v) = update.quorum {
            self.quorum = v;
        }
        if let Some(v) = update.voting_period {
            self.voting_period = v;
        }
        if let Some(v) = update.voting_delay {
            self.voting_delay = v;
        }
        if let Some(v) = update.execution_delay {
            self.execution_delay = v;
        }
        if let Some(v) = update.proposal_threshold {
            self.proposal_threshold = v;
        }
    }

    pub fn is_valid(&self) -> bool {
        self.quorum <= 100 && self.voting_period > 0
    }
}

#[contracttype]
pub enum SettingsDataKeys {
    Settings,
}

pub trait SettingsStorageFunc {
    fn _settings(&self) -> Option<GovernanceSettings>;
    fn _set_settings(&self, v: &GovernanceSettings);
}

impl SettingsStorageFunc for Env {
    fn _settings(&self) -> Option<GovernanceSettings> {
        self.storage().instance().get(&SettingsDataKeys::Settings)
    }

    fn _set_settings(&self, v: &GovernanceSettings) {
        self.storage()
            .instance()
            .set(&SettingsDataKeys::Settings, v);
    }
}

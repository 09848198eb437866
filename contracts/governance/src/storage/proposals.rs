use crate::storage::core::{BUMP_AMOUNT, BUMP_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Active,
    Passed,
    Failed,
    Executed,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteType {
    For,
    Against,
    Abstain,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Ids are assigned sequentially so a higher id is always a newer proposal
    pub id: u64,
    pub title: String,
    pub description: String,

    /// Display name chosen by the creator
    pub creator: String,
    pub creator_address: Address,
    pub status: ProposalStatus,
    pub for_votes: u128,
    pub against_votes: u128,
    pub abstain_votes: u128,

    /// Total voting power of the DAO when the proposal was created, quorum is measured against it
    pub total_voting_power: u128,
    pub start_time: u64,
    pub end_time: u64,
    pub created_at: u64,
    pub executed_at: u64,
}

impl Proposal {
    pub fn total_votes(&self) -> u128 {
        self.for_votes
            .saturating_add(self.against_votes)
            .saturating_add(self.abstain_votes)
    }
}

#[contracttype]
pub enum ProposalsDataKeys {
    Proposal(u64),
}

pub struct Proposals {
    pub env: Env,
}

impl Proposals {
    #[inline(always)]
    pub fn new(e: &Env) -> Proposals {
        Proposals { env: e.clone() }
    }

    pub fn get(&self, id: u64) -> Option<Proposal> {
        self.env
            .storage()
            .persistent()
            .get(&ProposalsDataKeys::Proposal(id))
    }

    pub fn set(&self, proposal: &Proposal) {
        self.env
            .storage()
            .persistent()
            .set(&ProposalsDataKeys::Proposal(proposal.id), proposal);
    }

    pub fn bump(&self, id: u64) {
        self.env.storage().persistent().extend_ttl(
            &ProposalsDataKeys::Proposal(id),
            BUMP_THRESHOLD,
            BUMP_AMOUNT,
        );
    }
}

pub trait ProposalsStorageFunc {
    fn _proposals(&self) -> Proposals;
}

impl ProposalsStorageFunc for Env {
    #[inline(always)]
    fn _proposals(&self) -> Proposals {
        Proposals::new(self)
    }
}

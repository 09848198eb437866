use crate::storage::core::{BUMP_AMOUNT, BUMP_THRESHOLD};
use crate::storage::proposals::VoteType;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub proposal_id: u64,
    pub voter: Address,
    pub vote_type: VoteType,

    /// The voter's voting power when the vote was cast
    pub voting_power: u128,
    pub created_at: u64,
}

#[contracttype]
pub enum VotesDataKeys {
    Vote((u64, Address)),

    /// (proposal, position starting at 1) to voter, in the order they voted
    Voter((u64, u32)),
    VotesCount(u64),
}

pub struct Votes {
    pub env: Env,
}

impl Votes {
    #[inline(always)]
    fn new(e: &Env) -> Votes {
        Votes { env: e.clone() }
    }

    pub fn get(&self, proposal_id: u64, voter: &Address) -> Option<Vote> {
        self.env
            .storage()
            .persistent()
            .get(&VotesDataKeys::Vote((proposal_id, voter.clone())))
    }

    pub fn has(&self, proposal_id: u64, voter: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&VotesDataKeys::Vote((proposal_id, voter.clone())))
    }

    /// Stores the vote and gives the voter the next position of the proposal
    pub fn insert(&self, vote: &Vote) {
        let key = VotesDataKeys::Vote((vote.proposal_id, vote.voter.clone()));
        self.env.storage().persistent().set(&key, vote);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);

        let position: u32 = self.count(vote.proposal_id) + 1;

        let voter_key = VotesDataKeys::Voter((vote.proposal_id, position));
        self.env.storage().persistent().set(&voter_key, &vote.voter);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&voter_key, BUMP_THRESHOLD, BUMP_AMOUNT);

        let count_key = VotesDataKeys::VotesCount(vote.proposal_id);
        self.env.storage().persistent().set(&count_key, &position);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&count_key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn count(&self, proposal_id: u64) -> u32 {
        self.env
            .storage()
            .persistent()
            .get(&VotesDataKeys::VotesCount(proposal_id))
            .unwrap_or(0)
    }

    pub fn voter_at(&self, proposal_id: u64, position: u32) -> Option<Address> {
        self.env
            .storage()
            .persistent()
            .get(&VotesDataKeys::Voter((proposal_id, position)))
    }
}

pub trait VotesStorageFunc {
    fn _votes(&self) -> Votes;
}

impl VotesStorageFunc for Env {
    fn _votes(&self) -> Votes {
        Votes::new(self)
    }
}

use crate::errors::ContractErrors;
use crate::storage::proposals::{Proposal, VoteType};
use soroban_sdk::{contracttype, panic_with_error, Env};

/// Percentages carry two decimals, 30.00% is 3000
pub const PERCENTAGE_DECIMALS: u128 = 100;

const FULL_PERCENTAGE: u128 = 100 * PERCENTAGE_DECIMALS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteTally {
    pub total_votes: u128,
    pub for_percentage: u128,
    pub against_percentage: u128,
    pub abstain_percentage: u128,
}

pub fn percentage(count: u128, total: u128) -> u128 {
    if total == 0 {
        return 0;
    }

    match count.checked_mul(FULL_PERCENTAGE) {
        Some(scaled) => scaled / total,
        // count can't be scaled so total >= count is far above FULL_PERCENTAGE
        None => count / (total / FULL_PERCENTAGE),
    }
}

/// Adds the voting power to the counter of the vote type.
/// The counters together never go over u128::MAX.
pub fn record_vote(e: &Env, proposal: &mut Proposal, vote_type: VoteType, voting_power: u128) {
    if proposal.total_votes().checked_add(voting_power).is_none() {
        panic_with_error!(e, &ContractErrors::InvalidVotingPower);
    }

    match vote_type {
        VoteType::For => proposal.for_votes += voting_power,
        VoteType::Against => proposal.against_votes += voting_power,
        VoteType::Abstain => proposal.abstain_votes += voting_power,
    }
}

pub fn tally(proposal: &Proposal) -> VoteTally {
    let total_votes: u128 = proposal.total_votes();
    VoteTally {
        total_votes,
        for_percentage: percentage(proposal.for_votes, total_votes),
        against_percentage: percentage(proposal.against_votes, total_votes),
        abstain_percentage: percentage(proposal.abstain_votes, total_votes),
    }
}

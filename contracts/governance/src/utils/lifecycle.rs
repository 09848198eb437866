use crate::storage::proposals::{Proposal, ProposalStatus, ProposalsStorageFunc};
use crate::storage::settings::{GovernanceSettings, TallyPolicy};
use crate::utils::events;
use soroban_sdk::{log, Env};

/// A window is usable only when both timestamps are set and the end comes after the start
pub fn has_valid_window(proposal: &Proposal) -> bool {
    proposal.start_time > 0 && proposal.end_time > proposal.start_time
}

pub fn quorum_reached(proposal: &Proposal, settings: &GovernanceSettings) -> bool {
    proposal.total_votes().saturating_mul(100)
        >= (settings.quorum as u128).saturating_mul(proposal.total_voting_power)
}

pub fn expired_status(proposal: &Proposal, settings: &GovernanceSettings) -> ProposalStatus {
    match settings.tally_policy {
        TallyPolicy::ExpireAsFailed => ProposalStatus::Failed,
        TallyPolicy::QuorumMajority => {
            if quorum_reached(proposal, settings)
                && proposal.for_votes > proposal.against_votes
            {
                ProposalStatus::Passed
            } else {
                ProposalStatus::Failed
            }
        }
    }
}

/// Derives the status a proposal should have at `now`, at most one transition is applied
pub fn effective_status(
    proposal: &Proposal,
    now: u64,
    settings: &GovernanceSettings,
) -> ProposalStatus {
    if !has_valid_window(proposal) {
        return proposal.status;
    }

    match proposal.status {
        ProposalStatus::Pending if proposal.start_time <= now => ProposalStatus::Active,
        ProposalStatus::Active if proposal.end_time <= now => expired_status(proposal, settings),
        status => status,
    }
}

/// Returns the proposal with its derived status without writing anything
pub fn with_effective_status(
    e: &Env,
    settings: &GovernanceSettings,
    mut proposal: Proposal,
) -> Proposal {
    proposal.status = effective_status(&proposal, e.ledger().timestamp(), settings);
    proposal
}

/// Persists the derived status when it differs from the stored one
pub fn reconcile(
    e: &Env,
    settings: &GovernanceSettings,
    mut proposal: Proposal,
) -> Proposal {
    let status: ProposalStatus = effective_status(&proposal, e.ledger().timestamp(), settings);

    if status != proposal.status {
        log!(e, "Proposal {} status corrected", proposal.id);
        proposal.status = status;
        e._proposals().set(&proposal);
        e._proposals().bump(proposal.id);
        events::proposal_status_changed(e, &proposal);
    }

    proposal
}

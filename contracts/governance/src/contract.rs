use crate::errors::ContractErrors;
use crate::storage::core::{CoreState, CoreStorageFunc, GovernanceStats, DEFAULT_VOTING_POWER};
use crate::storage::members::{Member, MemberUpdate, MembersStorageFunc};
use crate::storage::proposals::{Proposal, ProposalStatus, ProposalsStorageFunc, VoteType};
use crate::storage::settings::{
    GovernanceSettings, SettingsStorageFunc, SettingsUpdate, TallyPolicy,
};
use crate::storage::votes::{Vote, VotesStorageFunc};
use crate::utils::core::{
    get_core_state, get_settings, is_admin_address, load_active_member, load_member,
    load_proposal, validate_admin, validate_fees,
};
use crate::utils::events;
use crate::utils::lifecycle::{reconcile, with_effective_status};
use crate::utils::members::{add_voting_power, admit_member, validate_voting_power};
use crate::utils::payments::{charge_fee, FeeKind};
use crate::utils::tally::{record_vote, tally, VoteTally};
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, vec, Address, BytesN, Env, String, Vec,
};

pub trait GovernanceContractTrait {
    fn init(
        e: Env,
        admin: Address,
        treasury: Address,
        fee_asset: Address,
        registration_fee: u128,
        proposal_fee: u128,
        vote_fee: u128,
        settings: GovernanceSettings,
    );
    fn upgrade(e: Env, hash: BytesN<32>);
    fn set_admin(e: Env, address: Address);
    fn set_fees(e: Env, registration_fee: u128, proposal_fee: u128, vote_fee: u128);
    fn get_core_state(e: Env) -> CoreState;
    fn get_stats(e: Env) -> GovernanceStats;
    fn is_admin(e: Env, address: Address) -> bool;

    // Settings methods
    fn get_settings(e: Env) -> GovernanceSettings;
    fn update_settings(e: Env, update: SettingsUpdate) -> GovernanceSettings;
    fn set_tally_policy(e: Env, tally_policy: TallyPolicy) -> GovernanceSettings;

    // Members methods
    fn register(e: Env, caller: Address) -> Member;
    fn add_member(e: Env, address: Address, voting_power: u128) -> Member;
    fn get_member(e: Env, address: Address) -> Member;
    fn is_member(e: Env, address: Address) -> bool;
    fn get_members(e: Env, skip: u32, limit: u32) -> Vec<Member>;
    fn update_member(e: Env, address: Address, update: MemberUpdate) -> Member;

    // Proposals methods
    fn create_proposal(
        e: Env,
        caller: Address,
        creator: String,
        title: String,
        description: String,
        start_time: Option<u64>,
        end_time: Option<u64>,
    ) -> u64;
    fn get_proposal(e: Env, id: u64) -> Proposal;
    fn get_proposals(e: Env, skip: u32, limit: u32) -> Vec<Proposal>;
    fn sync_proposal(e: Env, id: u64) -> Proposal;
    fn sync_proposals(e: Env, ids: Vec<u64>) -> Vec<Proposal>;
    fn execute_proposal(e: Env, id: u64) -> Proposal;

    // Votes methods
    fn cast_vote(e: Env, voter: Address, proposal_id: u64, vote_type: VoteType) -> Vote;
    fn get_vote(e: Env, proposal_id: u64, voter: Address) -> Option<Vote>;
    fn has_voted(e: Env, proposal_id: u64, voter: Address) -> bool;
    fn get_votes(e: Env, proposal_id: u64, skip: u32, limit: u32) -> Vec<Vote>;
    fn get_tally(e: Env, proposal_id: u64) -> VoteTally;
}

#[contract]
pub struct GovernanceContract;

#[contractimpl]
impl GovernanceContractTrait for GovernanceContract {
    fn init(
        e: Env,
        admin: Address,
        treasury: Address,
        fee_asset: Address,
        registration_fee: u128,
        proposal_fee: u128,
        vote_fee: u128,
        settings: GovernanceSettings,
    ) {
        e._bump_instance();
        if e._core_state().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyStarted);
        }

        validate_fees(&e, &[registration_fee, proposal_fee, vote_fee]);

        if !settings.is_valid() {
            panic_with_error!(&e, &ContractErrors::InvalidSettings);
        }

        e._set_core_state(&CoreState {
            admin: admin.clone(),
            treasury,
            fee_asset,
            registration_fee,
            proposal_fee,
            vote_fee,
            default_voting_power: DEFAULT_VOTING_POWER,
        });
        e._set_settings(&settings);
        e._set_stats(&GovernanceStats::default());

        log!(&e, "Governance started with admin {}", admin);
    }

    fn upgrade(e: Env, hash: BytesN<32>) {
        e._bump_instance();
        validate_admin(&e);
        e.deployer().update_current_contract_wasm(hash);
    }

    fn set_admin(e: Env, address: Address) {
        e._bump_instance();
        let mut core_state: CoreState = validate_admin(&e);
        core_state.admin = address;
        e._set_core_state(&core_state);
    }

    fn set_fees(e: Env, registration_fee: u128, proposal_fee: u128, vote_fee: u128) {
        e._bump_instance();
        let mut core_state: CoreState = validate_admin(&e);
        validate_fees(&e, &[registration_fee, proposal_fee, vote_fee]);

        core_state.registration_fee = registration_fee;
        core_state.proposal_fee = proposal_fee;
        core_state.vote_fee = vote_fee;
        e._set_core_state(&core_state);
    }

    fn get_core_state(e: Env) -> CoreState {
        e._bump_instance();
        get_core_state(&e)
    }

    fn get_stats(e: Env) -> GovernanceStats {
        e._bump_instance();
        e._stats()
    }

    fn is_admin(e: Env, address: Address) -> bool {
        e._bump_instance();
        is_admin_address(&get_core_state(&e), &address)
    }

    fn get_settings(e: Env) -> GovernanceSettings {
        e._bump_instance();
        get_settings(&e)
    }

    fn update_settings(e: Env, update: SettingsUpdate) -> GovernanceSettings {
        e._bump_instance();
        validate_admin(&e);

        let mut settings: GovernanceSettings = get_settings(&e);
        settings.apply(&update);

        if !settings.is_valid() {
            panic_with_error!(&e, &ContractErrors::InvalidSettings);
        }

        e._set_settings(&settings);
        events::settings_updated(&e, &settings);
        settings
    }

    fn set_tally_policy(e: Env, tally_policy: TallyPolicy) -> GovernanceSettings {
        e._bump_instance();
        validate_admin(&e);

        let mut settings: GovernanceSettings = get_settings(&e);
        settings.tally_policy = tally_policy;

        e._set_settings(&settings);
        events::settings_updated(&e, &settings);
        settings
    }

    fn register(e: Env, caller: Address) -> Member {
        e._bump_instance();
        caller.require_auth();
        let core_state: CoreState = get_core_state(&e);

        if e._members().has(&caller) {
            panic_with_error!(&e, &ContractErrors::MemberAlreadyExists);
        }

        charge_fee(&e, &core_state, &caller, FeeKind::Registration);

        admit_member(&e, &caller, core_state.default_voting_power)
    }

    fn add_member(e: Env, address: Address, voting_power: u128) -> Member {
        e._bump_instance();
        validate_admin(&e);

        if e._members().has(&address) {
            panic_with_error!(&e, &ContractErrors::MemberAlreadyExists);
        }

        admit_member(&e, &address, voting_power)
    }

    fn get_member(e: Env, address: Address) -> Member {
        e._bump_instance();
        load_member(&e, &address)
    }

    fn is_member(e: Env, address: Address) -> bool {
        e._bump_instance();
        e._members().has(&address)
    }

    fn get_members(e: Env, skip: u32, limit: u32) -> Vec<Member> {
        e._bump_instance();
        let count: u64 = e._stats().members;

        let mut members: Vec<Member> = vec![&e];
        let mut position: u64 = (skip as u64).saturating_add(1);

        while position <= count && members.len() < limit {
            if let Some(member) = e._members().at(position).and_then(|a| e._members().get(&a)) {
                members.push_back(member);
            }
            position += 1;
        }

        members
    }

    fn update_member(e: Env, address: Address, update: MemberUpdate) -> Member {
        e._bump_instance();
        validate_admin(&e);

        let mut member: Member = load_member(&e, &address);
        let mut stats: GovernanceStats = e._stats();
        stats.total_voting_power = stats
            .total_voting_power
            .saturating_sub(member.effective_power());

        if let Some(voting_power) = update.voting_power {
            validate_voting_power(&e, voting_power);
            member.voting_power = voting_power;
        }
        if let Some(status) = update.status() {
            member.status = status;
        }

        stats.total_voting_power =
            add_voting_power(&e, stats.total_voting_power, member.effective_power());

        e._members().set(&member);
        e._members().bump(&address);
        e._set_stats(&stats);

        events::member_updated(&e, &member);
        member
    }

    fn create_proposal(
        e: Env,
        caller: Address,
        creator: String,
        title: String,
        description: String,
        start_time: Option<u64>,
        end_time: Option<u64>,
    ) -> u64 {
        e._bump_instance();
        caller.require_auth();
        let core_state: CoreState = get_core_state(&e);
        let settings: GovernanceSettings = get_settings(&e);

        let mut member: Member = load_active_member(&e, &caller);
        if member.voting_power < settings.proposal_threshold {
            panic_with_error!(&e, &ContractErrors::InsufficientVotingPower);
        }

        if title.len() == 0 || description.len() == 0 {
            panic_with_error!(&e, &ContractErrors::IncompleteProposal);
        }

        let now: u64 = e.ledger().timestamp();
        let start_time: u64 = start_time.unwrap_or(now.saturating_add(settings.voting_delay));
        let end_time: u64 = end_time.unwrap_or(start_time.saturating_add(settings.voting_period));

        if start_time == 0 || end_time <= start_time || end_time <= now {
            panic_with_error!(&e, &ContractErrors::InvalidVotingWindow);
        }

        charge_fee(&e, &core_state, &caller, FeeKind::Proposal);

        let mut stats: GovernanceStats = e._stats();
        stats.proposals += 1;

        let proposal: Proposal = Proposal {
            id: stats.proposals,
            title,
            description,
            creator,
            creator_address: caller.clone(),
            status: if start_time <= now {
                ProposalStatus::Active
            } else {
                ProposalStatus::Pending
            },
            for_votes: 0,
            against_votes: 0,
            abstain_votes: 0,
            total_voting_power: stats.total_voting_power,
            start_time,
            end_time,
            created_at: now,
            executed_at: 0,
        };

        e._proposals().set(&proposal);
        e._proposals().bump(proposal.id);

        member.proposals_created += 1;
        e._members().set(&member);
        e._members().bump(&caller);

        e._set_stats(&stats);

        log!(&e, "Proposal {} created by {}", proposal.id, caller);
        events::proposal_created(&e, &proposal);
        proposal.id
    }

    fn get_proposal(e: Env, id: u64) -> Proposal {
        e._bump_instance();
        with_effective_status(&e, &get_settings(&e), load_proposal(&e, id))
    }

    fn get_proposals(e: Env, skip: u32, limit: u32) -> Vec<Proposal> {
        e._bump_instance();
        let settings: GovernanceSettings = get_settings(&e);

        let mut proposals: Vec<Proposal> = vec![&e];
        let mut id: u64 = e._stats().proposals.saturating_sub(skip as u64);

        while id > 0 && proposals.len() < limit {
            if let Some(proposal) = e._proposals().get(id) {
                proposals.push_back(with_effective_status(&e, &settings, proposal));
            }
            id -= 1;
        }

        proposals
    }

    fn sync_proposal(e: Env, id: u64) -> Proposal {
        e._bump_instance();
        reconcile(&e, &get_settings(&e), load_proposal(&e, id))
    }

    fn sync_proposals(e: Env, ids: Vec<u64>) -> Vec<Proposal> {
        e._bump_instance();
        let settings: GovernanceSettings = get_settings(&e);

        let mut proposals: Vec<Proposal> = vec![&e];
        for id in ids.iter() {
            match e._proposals().get(id) {
                Some(proposal) => {
                    proposals.push_back(reconcile(&e, &settings, proposal));
                }
                None => {
                    log!(&e, "Proposal {} doesn't exist, skipping it", id);
                }
            }
        }

        proposals
    }

    fn execute_proposal(e: Env, id: u64) -> Proposal {
        e._bump_instance();
        validate_admin(&e);
        let settings: GovernanceSettings = get_settings(&e);

        let mut proposal: Proposal = reconcile(&e, &settings, load_proposal(&e, id));

        if proposal.status != ProposalStatus::Passed {
            panic_with_error!(&e, &ContractErrors::ProposalCantBeExecuted);
        }

        let now: u64 = e.ledger().timestamp();
        if now < proposal.end_time.saturating_add(settings.execution_delay) {
            panic_with_error!(&e, &ContractErrors::ExecutionDelayNotCompleted);
        }

        proposal.status = ProposalStatus::Executed;
        proposal.executed_at = now;

        e._proposals().set(&proposal);
        e._proposals().bump(proposal.id);

        log!(&e, "Proposal {} executed", proposal.id);
        events::proposal_executed(&e, &proposal);
        proposal
    }

    fn cast_vote(e: Env, voter: Address, proposal_id: u64, vote_type: VoteType) -> Vote {
        e._bump_instance();
        voter.require_auth();
        let core_state: CoreState = get_core_state(&e);

        let mut member: Member = load_active_member(&e, &voter);
        let mut proposal: Proposal =
            reconcile(&e, &get_settings(&e), load_proposal(&e, proposal_id));

        let now: u64 = e.ledger().timestamp();
        if proposal.status != ProposalStatus::Active || now >= proposal.end_time {
            panic_with_error!(&e, &ContractErrors::ProposalIsNotActive);
        }

        if e._votes().has(proposal_id, &voter) {
            panic_with_error!(&e, &ContractErrors::AlreadyVoted);
        }

        charge_fee(&e, &core_state, &voter, FeeKind::Vote);

        let vote: Vote = Vote {
            proposal_id,
            voter: voter.clone(),
            vote_type,
            voting_power: member.voting_power,
            created_at: now,
        };

        record_vote(&e, &mut proposal, vote_type, member.voting_power);
        e._votes().insert(&vote);

        e._proposals().set(&proposal);
        e._proposals().bump(proposal.id);

        member.votes_participated += 1;
        e._members().set(&member);
        e._members().bump(&voter);

        events::vote_cast(&e, &vote);
        vote
    }

    fn get_vote(e: Env, proposal_id: u64, voter: Address) -> Option<Vote> {
        e._bump_instance();
        e._votes().get(proposal_id, &voter)
    }

    fn has_voted(e: Env, proposal_id: u64, voter: Address) -> bool {
        e._bump_instance();
        e._votes().has(proposal_id, &voter)
    }

    fn get_votes(e: Env, proposal_id: u64, skip: u32, limit: u32) -> Vec<Vote> {
        e._bump_instance();
        let count: u32 = e._votes().count(proposal_id);

        let mut votes: Vec<Vote> = vec![&e];
        let mut position: u32 = skip.saturating_add(1);

        while position <= count && votes.len() < limit {
            if let Some(vote) = e
                ._votes()
                .voter_at(proposal_id, position)
                .and_then(|voter| e._votes().get(proposal_id, &voter))
            {
                votes.push_back(vote);
            }
            position += 1;
        }

        votes
    }

    fn get_tally(e: Env, proposal_id: u64) -> VoteTally {
        e._bump_instance();
        tally(&load_proposal(&e, proposal_id))
    }
}

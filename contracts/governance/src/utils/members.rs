use crate::errors::ContractErrors;
use crate::storage::core::{CoreStorageFunc, GovernanceStats, MAX_VOTING_POWER};
use crate::storage::members::{Member, MemberStatus, MembersStorageFunc};
use crate::utils::events;
use soroban_sdk::{log, panic_with_error, Address, Env};

pub fn validate_voting_power(e: &Env, voting_power: u128) {
    if voting_power > MAX_VOTING_POWER {
        panic_with_error!(e, &ContractErrors::InvalidVotingPower);
    }
}

pub fn add_voting_power(e: &Env, total: u128, voting_power: u128) -> u128 {
    total
        .checked_add(voting_power)
        .unwrap_or_else(|| panic_with_error!(e, &ContractErrors::InvalidVotingPower))
}

/// Creates an active member at the next index position and adds its power to the stats.
/// Callers must have checked the address is not a member yet.
pub fn admit_member(e: &Env, address: &Address, voting_power: u128) -> Member {
    validate_voting_power(e, voting_power);

    let member: Member = Member {
        address: address.clone(),
        voting_power,
        proposals_created: 0,
        votes_participated: 0,
        status: MemberStatus::Active,
        joined_at: e.ledger().timestamp(),
    };

    let mut stats: GovernanceStats = e._stats();
    stats.members += 1;
    stats.total_voting_power =
        add_voting_power(e, stats.total_voting_power, member.effective_power());

    e._members().set(&member);
    e._members().bump(address);
    e._members().set_position(stats.members, address);
    e._set_stats(&stats);

    log!(e, "Member admitted: {}", address.clone());
    events::member_registered(e, &member);
    member
}

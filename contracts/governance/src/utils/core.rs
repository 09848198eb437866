use crate::errors::ContractErrors;
use crate::storage::core::{CoreState, CoreStorageFunc};
use crate::storage::members::{Member, MembersStorageFunc};
use crate::storage::proposals::{Proposal, ProposalsStorageFunc};
use crate::storage::settings::{GovernanceSettings, SettingsStorageFunc};
use soroban_sdk::{panic_with_error, Address, Env};

pub fn get_core_state(e: &Env) -> CoreState {
    e._core_state()
        .unwrap_or_else(|| panic_with_error!(e, &ContractErrors::NotStarted))
}

pub fn get_settings(e: &Env) -> GovernanceSettings {
    e._settings()
        .unwrap_or_else(|| panic_with_error!(e, &ContractErrors::NotStarted))
}

/// Requires the signature of the current admin and returns the core state
pub fn validate_admin(e: &Env) -> CoreState {
    let core_state: CoreState = get_core_state(e);
    core_state.admin.require_auth();
    core_state
}

pub fn is_admin_address(core_state: &CoreState, address: &Address) -> bool {
    &core_state.admin == address
}

// Fees are transferred as i128 so they can't go over i128::MAX
pub fn validate_fees(e: &Env, fees: &[u128]) {
    for fee in fees.iter() {
        if *fee > i128::MAX as u128 {
            panic_with_error!(e, &ContractErrors::InvalidFee);
        }
    }
}

pub fn load_proposal(e: &Env, id: u64) -> Proposal {
    e._proposals()
        .get(id)
        .unwrap_or_else(|| panic_with_error!(e, &ContractErrors::ProposalDoesntExist))
}

pub fn load_member(e: &Env, address: &Address) -> Member {
    e._members()
        .get(address)
        .unwrap_or_else(|| panic_with_error!(e, &ContractErrors::MemberDoesntExist))
}

pub fn load_active_member(e: &Env, address: &Address) -> Member {
    let member: Member = load_member(e, address);
    if !member.is_active() {
        panic_with_error!(e, &ContractErrors::MemberIsInactive);
    }

    member
}

use crate::storage::members::Member;
use crate::storage::proposals::Proposal;
use crate::storage::settings::GovernanceSettings;
use crate::storage::votes::Vote;
use soroban_sdk::{symbol_short, Env};

// The first topic is the table that changed so listeners can subscribe per table

pub fn member_registered(e: &Env, member: &Member) {
    e.events().publish(
        (symbol_short!("members"), symbol_short!("register")),
        member.clone(),
    );
}

pub fn member_updated(e: &Env, member: &Member) {
    e.events().publish(
        (symbol_short!("members"), symbol_short!("update")),
        member.clone(),
    );
}

pub fn proposal_created(e: &Env, proposal: &Proposal) {
    e.events().publish(
        (symbol_short!("proposals"), symbol_short!("create")),
        proposal.clone(),
    );
}

pub fn proposal_status_changed(e: &Env, proposal: &Proposal) {
    e.events().publish(
        (symbol_short!("proposals"), symbol_short!("status")),
        (proposal.id, proposal.status),
    );
}

pub fn proposal_executed(e: &Env, proposal: &Proposal) {
    e.events().publish(
        (symbol_short!("proposals"), symbol_short!("execute")),
        (proposal.id, proposal.executed_at),
    );
}

pub fn vote_cast(e: &Env, vote: &Vote) {
    e.events().publish(
        (symbol_short!("votes"), symbol_short!("cast")),
        vote.clone(),
    );
}

pub fn settings_updated(e: &Env, settings: &GovernanceSettings) {
    e.events().publish(
        (symbol_short!("settings"), symbol_short!("update")),
        settings.clone(),
    );
}

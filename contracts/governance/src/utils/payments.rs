use crate::errors::ContractErrors;
use crate::storage::core::CoreState;
use soroban_sdk::{log, panic_with_error, token, Address, Env};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeKind {
    Registration,
    Proposal,
    Vote,
}

pub fn fee_amount(core_state: &CoreState, kind: FeeKind) -> u128 {
    match kind {
        FeeKind::Registration => core_state.registration_fee,
        FeeKind::Proposal => core_state.proposal_fee,
        FeeKind::Vote => core_state.vote_fee,
    }
}

/// Transfers `amount` of `asset` from the payer to the destination, the payer must sign it.
/// A rejected transfer aborts the whole invocation so nothing persisted after the payment survives.
pub fn pay(e: &Env, asset: &Address, payer: &Address, amount: u128, destination: &Address) {
    if amount == 0 {
        return;
    }

    let result =
        token::Client::new(e, asset).try_transfer(payer, destination, &(amount as i128));

    if result.is_err() {
        log!(e, "Fee payment of {} from {} failed", amount, payer.clone());
        panic_with_error!(e, &ContractErrors::FeePaymentFailed);
    }
}

pub fn charge_fee(e: &Env, core_state: &CoreState, payer: &Address, kind: FeeKind) {
    pay(
        e,
        &core_state.fee_asset,
        payer,
        fee_amount(core_state, kind),
        &core_state.treasury,
    );
}

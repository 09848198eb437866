#![cfg(test)]

use crate::errors::ContractErrors;
use crate::storage::core::MAX_VOTING_POWER;
use crate::storage::members::MemberUpdate;
use crate::storage::proposals::{Proposal, ProposalStatus, VoteType};
use crate::storage::votes::{Vote, VotesStorageFunc};
use crate::tests::test_utils::{
    create_test_data, fund, init_contract, new_proposal, register_member, reset_auths,
    set_timestamp, TestData, DAY, HOUR, PROPOSAL_FEE, REGISTRATION_FEE, START_TIMESTAMP,
    VOTE_FEE,
};
use crate::utils::tally::VoteTally;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, Env, IntoVal, Vec};

#[test]
pub fn test_cast_vote() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let creator: Address = register_member(&e, &test_data, PROPOSAL_FEE);
    let voter: Address = register_member(&e, &test_data, VOTE_FEE * 2);
    let id: u64 = new_proposal(
        &e,
        &test_data,
        &creator,
        START_TIMESTAMP,
        START_TIMESTAMP + DAY,
    );

    assert!(test_data
        .contract_client
        .try_cast_vote(&voter, &id, &VoteType::For)
        .is_err());

    set_timestamp(&e, START_TIMESTAMP + HOUR);

    let vote: Vote = test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &voter,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "cast_vote",
                args: (voter.clone(), id, VoteType::For).into_val(&e),
                sub_invokes: &[MockAuthInvoke {
                    contract: &test_data.native_asset_client.address,
                    fn_name: "transfer",
                    args: (voter.clone(), test_data.treasury.clone(), VOTE_FEE as i128)
                        .into_val(&e),
                    sub_invokes: &[],
                }],
            },
        }])
        .cast_vote(&voter, &id, &VoteType::For);

    assert_eq!(vote.proposal_id, id);
    assert_eq!(&vote.voter, &voter);
    assert_eq!(vote.vote_type, VoteType::For);
    assert_eq!(vote.voting_power, 100);
    assert_eq!(vote.created_at, START_TIMESTAMP + HOUR);

    let proposal: Proposal = test_data.contract_client.get_proposal(&id);
    assert_eq!(proposal.for_votes, 100);
    assert_eq!(proposal.against_votes, 0);
    assert_eq!(proposal.abstain_votes, 0);

    assert_eq!(
        test_data.native_asset_client.balance(&voter),
        VOTE_FEE as i128
    );
    assert_eq!(
        test_data.native_asset_client.balance(&test_data.treasury),
        (REGISTRATION_FEE * 2 + PROPOSAL_FEE + VOTE_FEE) as i128
    );

    assert!(test_data.contract_client.has_voted(&id, &voter));
    assert!(!test_data.contract_client.has_voted(&id, &creator));
    assert_eq!(
        test_data.contract_client.get_vote(&id, &voter),
        Some(vote.clone())
    );
    assert_eq!(test_data.contract_client.get_vote(&id, &creator), None);
    assert_eq!(
        test_data.contract_client.get_member(&voter).votes_participated,
        1
    );

    e.as_contract(&test_data.contract_client.address, || {
        let stored: Vote = e._votes().get(id, &voter).unwrap();
        assert_eq!(&stored, &vote);
    });

    let already_voted_error = test_data
        .contract_client
        .mock_all_auths()
        .try_cast_vote(&voter, &id, &VoteType::Against)
        .unwrap_err()
        .unwrap();
    assert_eq!(already_voted_error, ContractErrors::AlreadyVoted.into());

    // The second attempt neither charged nor counted anything
    assert_eq!(
        test_data.native_asset_client.balance(&voter),
        VOTE_FEE as i128
    );
    let proposal: Proposal = test_data.contract_client.get_proposal(&id);
    assert_eq!(proposal.for_votes, 100);
    assert_eq!(proposal.against_votes, 0);
}

#[test]
pub fn test_vote_counts_by_type() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let creator: Address = register_member(&e, &test_data, PROPOSAL_FEE);
    let id: u64 = new_proposal(
        &e,
        &test_data,
        &creator,
        START_TIMESTAMP,
        START_TIMESTAMP + DAY,
    );

    let for_voter: Address = register_member(&e, &test_data, VOTE_FEE);
    let against_voter: Address = register_member(&e, &test_data, VOTE_FEE);
    let abstain_voter: Address = register_member(&e, &test_data, VOTE_FEE);

    test_data.contract_client.mock_all_auths().update_member(
        &for_voter,
        &MemberUpdate {
            voting_power: Some(30),
            active: None,
        },
    );
    test_data.contract_client.mock_all_auths().update_member(
        &against_voter,
        &MemberUpdate {
            voting_power: Some(70),
            active: None,
        },
    );

    test_data
        .contract_client
        .mock_all_auths()
        .cast_vote(&for_voter, &id, &VoteType::For);

    let after_for: Proposal = test_data.contract_client.get_proposal(&id);
    assert_eq!(after_for.for_votes, 30);
    assert_eq!(after_for.against_votes, 0);
    assert_eq!(after_for.abstain_votes, 0);

    test_data
        .contract_client
        .mock_all_auths()
        .cast_vote(&against_voter, &id, &VoteType::Against);

    let tally: VoteTally = test_data.contract_client.get_tally(&id);
    assert_eq!(
        tally,
        VoteTally {
            total_votes: 100,
            for_percentage: 3000,
            against_percentage: 7000,
            abstain_percentage: 0,
        }
    );

    test_data
        .contract_client
        .mock_all_auths()
        .cast_vote(&abstain_voter, &id, &VoteType::Abstain);

    let proposal: Proposal = test_data.contract_client.get_proposal(&id);
    assert_eq!(proposal.for_votes, 30);
    assert_eq!(proposal.against_votes, 70);
    assert_eq!(proposal.abstain_votes, 100);

    let tally: VoteTally = test_data.contract_client.get_tally(&id);
    assert_eq!(tally.total_votes, 200);
    assert_eq!(tally.for_percentage, 1500);
    assert_eq!(tally.against_percentage, 3500);
    assert_eq!(tally.abstain_percentage, 5000);

    let votes: Vec<Vote> = test_data.contract_client.get_votes(&id, &0, &10);
    assert_eq!(votes.len(), 3);
    assert_eq!(&votes.get(0).unwrap().voter, &for_voter);
    assert_eq!(&votes.get(1).unwrap().voter, &against_voter);
    assert_eq!(&votes.get(2).unwrap().voter, &abstain_voter);
    assert_eq!(votes.get(1).unwrap().voting_power, 70);

    let page: Vec<Vote> = test_data.contract_client.get_votes(&id, &1, &1);
    assert_eq!(page.len(), 1);
    assert_eq!(&page.get(0).unwrap().voter, &against_voter);
    assert_eq!(test_data.contract_client.get_votes(&id, &3, &10).len(), 0);
    assert_eq!(test_data.contract_client.get_votes(&id, &0, &0).len(), 0);
}

#[test]
pub fn test_empty_tally() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let creator: Address = register_member(&e, &test_data, PROPOSAL_FEE);
    let id: u64 = new_proposal(
        &e,
        &test_data,
        &creator,
        START_TIMESTAMP,
        START_TIMESTAMP + DAY,
    );

    let tally: VoteTally = test_data.contract_client.get_tally(&id);
    assert_eq!(tally.total_votes, 0);
    assert_eq!(tally.for_percentage, 0);
    assert_eq!(tally.against_percentage, 0);
    assert_eq!(tally.abstain_percentage, 0);
    assert_eq!(test_data.contract_client.get_votes(&id, &0, &10).len(), 0);

    let missing_error = test_data
        .contract_client
        .try_get_tally(&42)
        .unwrap_err()
        .unwrap();
    assert_eq!(missing_error, ContractErrors::ProposalDoesntExist.into());
}

#[test]
pub fn test_vote_outside_window() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let creator: Address = register_member(&e, &test_data, PROPOSAL_FEE);
    let voter: Address = register_member(&e, &test_data, VOTE_FEE);
    let id: u64 = new_proposal(
        &e,
        &test_data,
        &creator,
        START_TIMESTAMP + HOUR,
        START_TIMESTAMP + DAY,
    );

    let pending_error = test_data
        .contract_client
        .mock_all_auths()
        .try_cast_vote(&voter, &id, &VoteType::For)
        .unwrap_err()
        .unwrap();
    assert_eq!(pending_error, ContractErrors::ProposalIsNotActive.into());

    // Once started the vote reconciles the stored status
    set_timestamp(&e, START_TIMESTAMP + HOUR);
    test_data
        .contract_client
        .mock_all_auths()
        .cast_vote(&voter, &id, &VoteType::Against);
    assert_eq!(
        test_data.contract_client.get_proposal(&id).status,
        ProposalStatus::Active
    );

    let late_voter: Address = register_member(&e, &test_data, VOTE_FEE);
    set_timestamp(&e, START_TIMESTAMP + DAY);

    let ended_error = test_data
        .contract_client
        .mock_all_auths()
        .try_cast_vote(&late_voter, &id, &VoteType::For)
        .unwrap_err()
        .unwrap();
    assert_eq!(ended_error, ContractErrors::ProposalIsNotActive.into());
    assert!(!test_data.contract_client.has_voted(&id, &late_voter));

    let missing_error = test_data
        .contract_client
        .mock_all_auths()
        .try_cast_vote(&late_voter, &7, &VoteType::For)
        .unwrap_err()
        .unwrap();
    assert_eq!(missing_error, ContractErrors::ProposalDoesntExist.into());
}

#[test]
pub fn test_vote_requirements() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let creator: Address = register_member(&e, &test_data, PROPOSAL_FEE);
    let id: u64 = new_proposal(
        &e,
        &test_data,
        &creator,
        START_TIMESTAMP,
        START_TIMESTAMP + DAY,
    );

    let outsider: Address = Address::generate(&e);
    fund(&e, &test_data, &outsider, VOTE_FEE);
    let not_member_error = test_data
        .contract_client
        .mock_all_auths()
        .try_cast_vote(&outsider, &id, &VoteType::For)
        .unwrap_err()
        .unwrap();
    assert_eq!(not_member_error, ContractErrors::MemberDoesntExist.into());

    // Registered but without funds for the vote fee
    let broke_voter: Address = register_member(&e, &test_data, 0);
    let payment_error = test_data
        .contract_client
        .mock_all_auths()
        .try_cast_vote(&broke_voter, &id, &VoteType::For)
        .unwrap_err()
        .unwrap();
    assert_eq!(payment_error, ContractErrors::FeePaymentFailed.into());
    assert!(!test_data.contract_client.has_voted(&id, &broke_voter));
    assert_eq!(test_data.contract_client.get_proposal(&id).for_votes, 0);
    assert_eq!(
        test_data
            .contract_client
            .get_member(&broke_voter)
            .votes_participated,
        0
    );

    let inactive_voter: Address = register_member(&e, &test_data, VOTE_FEE);
    test_data.contract_client.mock_all_auths().update_member(
        &inactive_voter,
        &MemberUpdate {
            voting_power: None,
            active: Some(false),
        },
    );
    reset_auths(&e);

    let inactive_error = test_data
        .contract_client
        .mock_all_auths()
        .try_cast_vote(&inactive_voter, &id, &VoteType::For)
        .unwrap_err()
        .unwrap();
    assert_eq!(inactive_error, ContractErrors::MemberIsInactive.into());
}

#[test]
pub fn test_tally_with_large_voting_power() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let creator: Address = register_member(&e, &test_data, PROPOSAL_FEE);
    let id: u64 = new_proposal(
        &e,
        &test_data,
        &creator,
        START_TIMESTAMP,
        START_TIMESTAMP + DAY,
    );

    let whale: Address = register_member(&e, &test_data, VOTE_FEE);

    let too_large_error = test_data
        .contract_client
        .mock_all_auths()
        .try_update_member(
            &whale,
            &MemberUpdate {
                voting_power: Some(10u128.pow(35)),
                active: None,
            },
        )
        .unwrap_err()
        .unwrap();
    assert_eq!(too_large_error, ContractErrors::InvalidVotingPower.into());

    test_data.contract_client.mock_all_auths().update_member(
        &whale,
        &MemberUpdate {
            voting_power: Some(MAX_VOTING_POWER),
            active: None,
        },
    );

    let other: Address = Address::generate(&e);
    fund(&e, &test_data, &other, VOTE_FEE);
    test_data
        .contract_client
        .mock_all_auths()
        .add_member(&other, &MAX_VOTING_POWER);

    test_data
        .contract_client
        .mock_all_auths()
        .cast_vote(&whale, &id, &VoteType::For);
    test_data
        .contract_client
        .mock_all_auths()
        .cast_vote(&other, &id, &VoteType::Against);
    reset_auths(&e);

    let tally: VoteTally = test_data.contract_client.get_tally(&id);
    assert_eq!(tally.total_votes, MAX_VOTING_POWER * 2);
    assert_eq!(tally.for_percentage, 5000);
    assert_eq!(tally.against_percentage, 5000);
    assert_eq!(tally.abstain_percentage, 0);
}

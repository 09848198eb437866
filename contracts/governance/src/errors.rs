use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    // Core Errors
    NotStarted = 0,
    AlreadyStarted = 1,
    InvalidSettings = 2,
    InvalidFee = 3,
    FeePaymentFailed = 4,

    // Members Errors
    MemberAlreadyExists = 10,
    MemberDoesntExist = 11,
    MemberIsInactive = 12,
    InsufficientVotingPower = 13,
    InvalidVotingPower = 14,

    // Proposals Errors
    ProposalDoesntExist = 20,
    IncompleteProposal = 21,
    InvalidVotingWindow = 22,
    ProposalIsNotActive = 23,
    ProposalCantBeExecuted = 24,
    ExecutionDelayNotCompleted = 25,

    // Voting Errors
    AlreadyVoted = 30,
}

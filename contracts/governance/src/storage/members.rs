use crate::storage::core::{BUMP_AMOUNT, BUMP_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberStatus {
    Active,
    Inactive,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub address: Address,
    pub voting_power: u128,
    pub proposals_created: u32,
    pub votes_participated: u32,
    pub status: MemberStatus,
    pub joined_at: u64,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    /// The voting power this member adds to the DAO total
    pub fn effective_power(&self) -> u128 {
        if self.is_active() {
            self.voting_power
        } else {
            0
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemberUpdate {
    pub voting_power: Option<u128>,

    /// `Some(false)` deactivates the member, `Some(true)` activates it again
    pub active: Option<bool>,
}

impl MemberUpdate {
    pub fn status(&self) -> Option<MemberStatus> {
        self.active.map(|active| {
            if active {
                MemberStatus::Active
            } else {
                MemberStatus::Inactive
            }
        })
    }
}

#[contracttype]
pub enum MembersDataKeys {
    Member(Address),

    /// Registration position (starting at 1) to member address
    Index(u64),
}

pub struct Members {
    pub env: Env,
}

impl Members {
    #[inline(always)]
    pub fn new(e: &Env) -> Members {
        Members { env: e.clone() }
    }

    pub fn get(&self, address: &Address) -> Option<Member> {
        self.env
            .storage()
            .persistent()
            .get(&MembersDataKeys::Member(address.clone()))
    }

    pub fn has(&self, address: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&MembersDataKeys::Member(address.clone()))
    }

    pub fn set(&self, member: &Member) {
        self.env
            .storage()
            .persistent()
            .set(&MembersDataKeys::Member(member.address.clone()), member);
    }

    pub fn bump(&self, address: &Address) {
        self.env.storage().persistent().extend_ttl(
            &MembersDataKeys::Member(address.clone()),
            BUMP_THRESHOLD,
            BUMP_AMOUNT,
        );
    }

    pub fn at(&self, position: u64) -> Option<Address> {
        self.env
            .storage()
            .persistent()
            .get(&MembersDataKeys::Index(position))
    }

    pub fn set_position(&self, position: u64, address: &Address) {
        let key = MembersDataKeys::Index(position);
        self.env.storage().persistent().set(&key, address);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }
}

pub trait MembersStorageFunc {
    fn _members(&self) -> Members;
}

impl MembersStorageFunc for Env {
    #[inline(always)]
    fn _members(&self) -> Members {
        Members::new(self)
    }
}

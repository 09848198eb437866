#![no_std]

#[cfg(test)]
extern crate std;

mod contract;
mod errors;
mod storage;
mod utils;

mod tests;

pub use crate::contract::GovernanceContractClient;

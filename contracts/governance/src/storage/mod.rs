pub mod core;
pub mod members;
pub mod proposals;
pub mod settings;
pub mod votes;

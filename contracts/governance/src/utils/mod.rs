pub mod core;
pub mod events;
pub mod lifecycle;
pub mod members;
pub mod payments;
pub mod tally;

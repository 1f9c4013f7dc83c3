//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod round_setup;
pub mod run_turn;

#[cfg(test)]
pub(crate) mod test_support;

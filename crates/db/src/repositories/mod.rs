//! Repositories, one per table.

pub mod rule_run_repo;

pub use rule_run_repo::RuleRunRepo;

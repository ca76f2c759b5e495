//! Release checks.

mod branch_check;
mod check_trait;
mod suite;

pub use branch_check::BranchMasterCheck;
pub use check_trait::{Check, CheckResult};
pub use suite::{filter_checks, run_checks};

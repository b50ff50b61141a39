//! Tool implementations.

pub mod investment;
pub mod profit;

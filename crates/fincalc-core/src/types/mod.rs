//! Domain types shared by the calculators.
//!
//! - [`Rate`]: annual rate expressed in percent

mod rate;

pub use rate::Rate;

//! fincalc CLI - console investment projector and profit calculator.
//!
//! Both tools follow the same cycle: prompt for three numbers on stdin,
//! compute, print. The binaries are thin wrappers around
//! [`commands::investment::execute`] and [`commands::profit::execute`].
//!
//! # Usage
//!
//! ```bash
//! # Interactive
//! investment-projector
//!
//! # Piped, one line answers every prompt
//! echo "10000 4000 20" | profit-calculator --quiet
//!
//! # Blank rate falls back to --return-rate
//! printf '1000\n10\n\n' | investment-projector -q --return-rate 6 --format json
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod settings;

//! # Muster Development Tools
//!
//! Command-line tools for development:
//! - Catalog loading and integrity checks
//! - Roster evaluation reports

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod load;
pub mod report;
pub mod validate;

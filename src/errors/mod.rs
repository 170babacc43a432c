//! Error types and error handling for the type checker.
//!
//! This module defines the typing failures reported by the checker. It includes:
//!
//! - One error variant per failing typing rule
//! - The rendering of the offending term for diagnostics
//! - Error names and suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;

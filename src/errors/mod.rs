//! Error types and error handling for the type checker.
//!
//! This module defines the error types produced while checking a term.
//! It includes:
//!
//! - Error structures with source position information
//! - One error variant per rule the checker enforces
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;

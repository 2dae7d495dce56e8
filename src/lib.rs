//! Dobble-style deck generation.
//!
//! Builds the order-n incidence construction for a requested card size,
//! checks that every pair of cards shares exactly one symbol, and falls back
//! to a greedily filtered sub-deck when the construction is not a valid plane.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

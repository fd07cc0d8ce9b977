//! HTTP front end for the review service.
//!
//! The binary in `main.rs` wires configuration and logging; everything that
//! tests need to drive the router lives in this library.

pub mod api;
pub mod cli;
pub mod router;
pub mod startup;
pub mod state;

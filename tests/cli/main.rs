//! End-to-end tests for the `tailwind-cli` binary.
#![cfg(unix)]

#[path = "../harness/mod.rs"]
mod harness;

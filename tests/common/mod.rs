//! Common test utilities.
//!
//! Shared fixtures for the integration tests: temporary search roots,
//! call-counting providers and tracing capture.

#![allow(dead_code)]

pub mod counting;
pub mod fixtures;
pub mod logs;

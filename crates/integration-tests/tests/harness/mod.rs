//! Shared test harness: mock providers, config builder, test server
//!
//! Each test binary pulls in the whole harness; not every binary uses
//! every helper.

#![allow(dead_code)]

pub mod config;
pub mod mock_llm;
pub mod mock_speech;
pub mod server;

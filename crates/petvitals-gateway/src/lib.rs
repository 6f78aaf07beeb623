//! petvitals gateway library entry.
//!
//! Hosts the metrics engine behind a small HTTP API: strict YAML config,
//! request handlers, operational endpoints, and in-process counters. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;

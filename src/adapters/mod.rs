//! Infrastructure adapters. Implement ports.
//!
//! Language model client, HTTP gateway, terminal banner. Map errors to DomainError.

pub mod ai;
pub mod http;
pub mod ui;

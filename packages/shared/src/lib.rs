//! Code shared between the activity board client and its test fixtures.
//!
//! - `dto`: wire types of the activities REST API
//! - `logger`: tracing subscriber setup

pub mod dto;
pub mod logger;

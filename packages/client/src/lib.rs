//! Activity board client library.
//!
//! This library provides the board component that keeps a rendered list of
//! extracurricular activities in sync with the activities REST API, and a
//! terminal front end for it.

// layers
pub mod api;
pub mod board;
pub mod domain;
pub mod terminal;

// shared
pub mod config;
pub mod error;

//! Core library for the coaching consultation service.
//!
//! The [`workflows::consultation`] module holds the questionnaire domain model
//! and the recommendation engine that matches clients to coaching programs.
//! Configuration, telemetry, and error plumbing shared with the service
//! binaries live alongside it.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

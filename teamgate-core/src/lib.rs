//! Teamgate Core - invitation signup and role-change authorization
//!
//! This crate validates signed invitation links before an account is created
//! and decides whether one user may change another user's roles. Storage and
//! HTTP transport live outside; services talk to them through the traits in
//! [`repository`].

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod policy;
pub mod repository;
pub mod service;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};

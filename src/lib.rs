//! Student Mark Report Service Library
//!
//! This library crate defines the core modules behind the report server
//! binary (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`grading`**: The pure per-student computation (average, grade tier,
//!   best subject, remark). No shared state, no failure modes.
//! - **`report`**: The parallel batch pipeline. Fans grading out over a
//!   bounded number of workers, joins results back in input order, and
//!   aggregates the batch-scoped class summary.
//! - **`store`**: The shared state layer. An append-only, in-memory
//!   collection of every processed report with a derived store-wide summary.
//! - **`auth`**: Demo-grade signup/login backed by an in-memory user
//!   directory with hashed passwords and session tokens.
//!
//! Server configuration (bind address, frontend directory) lives in
//! **`config`**.

pub mod auth;
pub mod config;
pub mod grading;
pub mod report;
pub mod store;

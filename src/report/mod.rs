//! Report Module
//!
//! The batch pipeline in the middle of the service: a list of student inputs
//! goes in, one complete `Report` comes out.
//!
//! ## Overview
//! Each student is graded independently and concurrently; results are joined
//! back in input order and aggregated into a batch-scoped class summary.
//! The HTTP handler persists the finished report to the shared store before
//! returning it to the caller.
//!
//! ## Submodules
//! - **`processor`**: Bounded parallel fan-out/fan-in and aggregation.
//! - **`handlers`**: The `/processReport` HTTP handler and input filtering.
//! - **`types`**: `Report` and `Summary`.

pub mod handlers;
pub mod processor;
pub mod types;

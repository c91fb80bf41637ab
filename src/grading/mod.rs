//! Grading Module
//!
//! The pure per-student computation at the bottom of the report pipeline.
//!
//! ## Overview
//! Given one student's raw marks, this module derives the average, the grade
//! tier (A+/A/B/C/F via fixed thresholds), the best-subject label and the
//! remark text. There is no shared state and no failure mode, which is what
//! lets the report processor fan these computations out freely.
//!
//! ## Submodules
//! - **`calculator`**: The computation itself.
//! - **`types`**: `StudentInput`, `StudentResult` and the `Grade` tier enum.

pub mod calculator;
pub mod types;

//! Report Store Module
//!
//! The shared state layer of the service.
//!
//! ## Core Concepts
//! - **Append-only**: every processed report is appended once and never
//!   mutated or removed afterwards.
//! - **Concurrent access**: a writer-exclusive `RwLock` serializes appends
//!   against reads, so no reader ever observes a torn append.
//! - **Derived summary**: the store-wide class summary is recomputed on
//!   demand from the flattened set of all student results.
//! - **Volatile**: purely memory-resident; contents vanish on restart.
//!
//! ## Submodules
//! - **`memory`**: The `ReportStore` itself.
//! - **`handlers`**: Read-side HTTP handlers (summary and listings).

pub mod handlers;
pub mod memory;

#[cfg(test)]
mod tests;

//! Core library for Brandkit.
//!
//! This crate provides the wizard step sequencer and the append-only version
//! history for the brand-guideline authoring flow, independent of any
//! transport or persistence layer. The surrounding session owns storage: it
//! loads a history value, calls an operation here, and persists the returned
//! value.
//!
//! # Usage
//!
//! ```
//! use brandkit_core::history::message;
//! use brandkit_core::{steps, GenerationStep, VersionKind};
//!
//! let step = GenerationStep::first();
//! assert!(steps::progress(step) > 0);
//!
//! let history = message::add_version(&[], "step-1", "draft".into(), VersionKind::Step, None);
//! assert!(message::active_version(&history, "step-1").is_some());
//! ```

pub mod history;
pub mod models;
pub mod steps;

// Re-export commonly used types at crate root
pub use models::*;

//! Append-only version histories for wizard content.
//!
//! Every operation takes the prior history by reference and returns a fresh
//! list; the input is never mutated, so callers may keep holding earlier
//! snapshots (undo, audit). Serializing writes to one logical history is the
//! caller's job; the engine itself has no shared state.

pub mod logo;
pub mod message;

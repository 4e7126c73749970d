//! Frame-rate resampling
//!
//! Converts 50 Hz source series to a target output rate. Two policies
//! exist because the export format changed over the rig's history; both
//! are kept as named strategies and selected explicitly.

pub mod policy;

pub use policy::{PolicyKind, ResamplePolicy};

//! # panel-core
//!
//! Core types, access rules, and error types for Panel.
//!
//! This crate provides the foundational types shared across all Panel crates:
//! - The `Interview` entity and its creation input
//! - The authenticated caller identity passed into every operation
//! - Participant-based access rules (pure functions, no I/O)
//! - Status constants and the optional status allow-list
//! - ID prefix constants
//! - Cross-cutting error types
//! - CLI response types

pub mod clock;
pub mod entities;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod policy;
pub mod responses;
pub mod status;

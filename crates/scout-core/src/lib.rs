//! # scout-core
//!
//! Core types, statuses, and result mappers for Scout.
//!
//! This crate provides the foundational types shared across all Scout crates:
//! - Job statuses with a fixed terminal set, score tiers, content kinds
//! - Job handles for asynchronous deep-research jobs
//! - Provider result shapes and the normalized display shape
//! - The savable-item shape accepted by the Items resource
//! - Text hygiene helpers (surrogate scrubbing, safe truncation)
//! - Pure mappers from provider results to savable items

pub mod enums;
pub mod errors;
pub mod item;
pub mod job;
pub mod mappers;
pub mod research;
pub mod search;
pub mod text;

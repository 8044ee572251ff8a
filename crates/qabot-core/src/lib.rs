//! Business logic and port trait definitions for qabot.
//!
//! This crate defines the "ports" (generation client and answer store
//! traits) that the infrastructure layer implements, plus the logic that
//! sits between them: folding a fragment stream into an answer and the
//! question/answer interaction itself. It depends only on `qabot-types` --
//! never on `qabot-infra` or any network/database crate.

pub mod generation;
pub mod qa;

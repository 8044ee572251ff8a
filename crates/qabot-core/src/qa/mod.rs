//! Question/answer interaction: the answer store port and the service that
//! ties generation and persistence together.

pub mod service;
pub mod store;

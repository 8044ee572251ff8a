//! Generation client abstraction and streamed-answer assembly.

pub mod assembler;
pub mod client;

//! Core domain types and storage contracts for companyhub.
//!
//! Everything in this crate is free of I/O: plain data types, pure
//! validation functions and the async repository traits that storage
//! backends implement.

pub mod company;
pub mod serde;
pub mod storage;

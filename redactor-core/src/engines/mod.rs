// redactor-core/src/engines/mod.rs
//! Concrete `RedactionEngine` implementations.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod data_redactor;

//! Integration tests for field-format
//!
//! These tests drive the public API the way a host framework does.

mod field_types;
mod host;
mod untyped;

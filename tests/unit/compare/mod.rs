//! Tests for the comparison passes

pub mod properties;

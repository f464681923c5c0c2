//! Integration tests for Layer 0: Foundation
//!
//! Tests for descriptors, coerced values, domain types, and errors.

mod values;

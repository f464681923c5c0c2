//! Integration tests for Layer 2: Sandbox
//!
//! Tests for context shortcuts resolved against an in-memory environment.

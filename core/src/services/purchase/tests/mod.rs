//! Tests for purchase service

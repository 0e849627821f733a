//! Tests for the token issuer

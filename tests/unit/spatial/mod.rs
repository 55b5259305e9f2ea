//! Unit tests for `spatial`

//! Unit tests for `math`

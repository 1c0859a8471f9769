//! Integration tests for slotboard.
//!
//! These tests drive the interaction controller through a test host and
//! verify complete gestures end-to-end.

mod pointer_capture_tests;

//! State management module
//!
//! This module holds everything the window displays, kept free of any
//! widget code so it can be exercised directly in tests:
//! - Form elements and lookup by id (form.rs)
//! - Preview wiring and update rules (preview.rs)

pub mod form;
pub mod preview;

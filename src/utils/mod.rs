//! Utility functions for input validation.
//!
//! - [`url_validator`] - Target URL validation
//! - [`keyword`] - Keyword normalization and validation

pub mod keyword;
pub mod url_validator;

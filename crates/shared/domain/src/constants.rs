//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 1;

/// Message reported when a user name is missing or empty
pub const NAME_REQUIRED_MESSAGE: &str = "Name cannot be empty";

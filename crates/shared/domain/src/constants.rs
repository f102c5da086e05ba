//! Domain-level constants.
//!
//! These constants define business rules and message templates.

// =============================================================================
// Policies
// =============================================================================

/// Earliest hour accepted by hour-window policies
pub const MIN_POLICY_HOUR: i32 = 0;

/// Latest hour accepted by hour-window policies (inclusive)
pub const MAX_POLICY_HOUR: i32 = 24;

/// Message for out-of-range policy hours
pub const INVALID_HOUR_MESSAGE: &str = "Start hour and end hour must be a valid hour";

/// Check if an hour value is accepted by hour-window policies
pub fn is_valid_hour(hour: i32) -> bool {
    (MIN_POLICY_HOUR..=MAX_POLICY_HOUR).contains(&hour)
}

// =============================================================================
// Transaction log
// =============================================================================

/// `tracing` target used for transaction lines
pub const TRANSACTION_LOG_TARGET: &str = "transactions";

/// Timestamp format for file-backed transaction logs ("Jan 01, 2024 10:00:00")
pub const TRANSACTION_LOG_TIME_FORMAT: &str = "%b %d, %Y %H:%M:%S";

// =============================================================================
// Validation
// =============================================================================

/// Message for addresses without exactly one `@`
pub const EMAIL_MISSING_AT_MESSAGE: &str =
    "The email address is not valid. It must have exactly one @-sign.";

/// Generic message for syntactically invalid addresses
pub const EMAIL_INVALID_MESSAGE: &str = "The email address is not valid.";

pub const EMAIL_LEADING_DOT_MESSAGE: &str = "An email address cannot start with a period.";

pub const EMAIL_DOT_BEFORE_AT_MESSAGE: &str =
    "An email address cannot have a period immediately before the @-sign.";

pub const EMAIL_DOUBLE_DOT_MESSAGE: &str = "An email address cannot have two periods in a row.";

pub const EMAIL_DOT_AFTER_AT_MESSAGE: &str =
    "An email address cannot have a period immediately after the @-sign.";

pub const EMAIL_TRAILING_DOT_MESSAGE: &str = "An email address cannot end with a period.";

/// Domain with a single label, such as `localhost`
pub const EMAIL_DOMAIN_NO_DOT_MESSAGE: &str =
    "The part after the @-sign is not valid. It should have a period.";

//! Application-wide constants.
//!
//! Centralizes magic numbers and strings for better maintainability.

// ============================================================================
// Code Generation Constants
// ============================================================================

/// Characters used for generating short codes and user ids (URL-safe alphanumeric)
pub const CODE_ALPHABET: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Default length of generated short codes
pub const DEFAULT_SHORT_CODE_LENGTH: usize = 6;

/// Length of generated user ids (same generator as short codes)
pub const USER_ID_LENGTH: usize = 6;

/// Maximum retry attempts when generating a unique code
pub const MAX_CODE_GENERATION_RETRIES: u32 = 10;

// ============================================================================
// Session Constants
// ============================================================================

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Default session lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

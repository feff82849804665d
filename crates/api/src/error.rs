// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use stayquote::CoreError;
use stayquote_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A uniqueness or referential rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred. The message is for logs; callers see a
    /// generic failure.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParseError { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::CheckOutNotAfterCheckIn { .. } => ApiError::InvalidInput {
            field: String::from("check_out"),
            message: err.to_string(),
        },
        DomainError::StayTooShort { .. } | DomainError::StayTooLong { .. } => {
            ApiError::InvalidInput {
                field: String::from("nights"),
                message: err.to_string(),
            }
        }
        DomainError::InvalidGuestCount { .. } => ApiError::InvalidInput {
            field: String::from("guests"),
            message: err.to_string(),
        },
        DomainError::InvalidHotelId(msg) => ApiError::InvalidInput {
            field: String::from("hotel_id"),
            message: msg,
        },
        DomainError::InvalidRoomTypeId(msg) => ApiError::InvalidInput {
            field: String::from("room_type_id"),
            message: msg,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidCapacity { .. } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: err.to_string(),
        },
        DomainError::InvalidPrice { .. } => ApiError::InvalidInput {
            field: String::from("price"),
            message: err.to_string(),
        },
        DomainError::InvalidAvailability { .. } => ApiError::InvalidInput {
            field: String::from("available"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// Store failures become opaque internal errors: the detail stays in the
/// message for logging, but the HTTP layer never shows it to callers.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::StoreFailure(store_err) => ApiError::Internal {
            message: store_err.to_string(),
        },
    }
}

//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error;

/// Client-facing message strings.
///
/// These are frozen by the published API contract: existing clients match on
/// them verbatim, so they must never be reworded.
pub mod messages {
    /// 404 body for any lookup miss.
    pub const USER_NOT_FOUND: &str = "The user with the specified ID does not exist.";
    /// 400 body when `name` or `bio` is missing from a payload.
    pub const MISSING_NAME_AND_BIO: &str = "Please provide name and bio for the user.";
    /// 500 body when the full collection cannot be read.
    pub const USERS_NOT_RETRIEVED: &str = "The users information could not be retrieved.";
    /// 500 body when a single record cannot be read.
    pub const USER_NOT_RETRIEVED: &str = "The user information could not be retrieved.";
    /// 500 body when a new record cannot be written.
    pub const USER_NOT_SAVED: &str = "There was an error while saving the user to the database";
    /// 500 body when an existing record cannot be rewritten.
    pub const USER_NOT_MODIFIED: &str = "The user information could not be modified.";
    /// 500 body when a record cannot be removed.
    pub const USER_NOT_REMOVED: &str = "The user could not be removed";
}

/// Storage operation that failed.
///
/// The in-memory backend never produces these, but the API contract reserves
/// an operation-specific 500 response for each one so a future persistent
/// backend can fail without changing the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    /// Reading the full collection.
    List,
    /// Reading a single record.
    Fetch,
    /// Writing a new record.
    Save,
    /// Rewriting an existing record.
    Update,
    /// Removing a record.
    Remove,
}

impl StorageOp {
    /// Returns the contract-mandated client message for this operation.
    #[must_use]
    pub const fn client_message(self) -> &'static str {
        match self {
            Self::List => messages::USERS_NOT_RETRIEVED,
            Self::Fetch => messages::USER_NOT_RETRIEVED,
            Self::Save => messages::USER_NOT_SAVED,
            Self::Update => messages::USER_NOT_MODIFIED,
            Self::Remove => messages::USER_NOT_REMOVED,
        }
    }
}

impl Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Fetch => "fetch",
            Self::Save => "save",
            Self::Update => "update",
            Self::Remove => "remove",
        };
        write!(f, "{}", name)
    }
}

/// Unified error type for the Atrium user directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// No record matches the requested id.
    #[error("user not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A payload is missing the required `name` or `bio` field.
    #[error("payload is missing required name or bio field")]
    MissingRequiredFields,

    /// The backing store failed.
    #[error("storage error during {op}: {detail}")]
    Storage {
        /// Which operation failed.
        op: StorageOp,
        /// Backend-specific detail, for logs only.
        detail: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DirectoryError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::MissingRequiredFields => 400,
            Self::Storage { .. } | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                500
            }
        }
    }

    /// Returns the JSON body to send to the client for this error.
    ///
    /// Lookup misses use the `message` key; everything else uses
    /// `errorMessage`, matching the published contract.
    #[must_use]
    pub fn client_body(&self) -> ErrorBody {
        match self {
            Self::NotFound { .. } => ErrorBody::message(messages::USER_NOT_FOUND),
            Self::MissingRequiredFields => {
                ErrorBody::error_message(messages::MISSING_NAME_AND_BIO)
            }
            Self::Storage { op, .. } => ErrorBody::error_message(op.client_message()),
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                ErrorBody::error_message(self.to_string())
            }
        }
    }

    /// Creates a not-found error for the given id.
    #[must_use]
    pub fn not_found<T: ToString>(id: T) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Creates a storage error for the given operation.
    #[must_use]
    pub fn storage<T: Into<String>>(op: StorageOp, detail: T) -> Self {
        Self::Storage {
            op,
            detail: detail.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

/// Serializable error body for API responses.
///
/// Exactly one of the two fields is set: `message` for 404 responses,
/// `errorMessage` for 400 and 500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Set for not-found responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Set for validation and storage failures.
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ErrorBody {
    /// Creates a body carrying the `message` key.
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            error_message: None,
        }
    }

    /// Creates a body carrying the `errorMessage` key.
    #[must_use]
    pub fn error_message(text: impl Into<String>) -> Self {
        Self {
            message: None,
            error_message: Some(text.into()),
        }
    }
}

impl From<&DirectoryError> for ErrorBody {
    fn from(error: &DirectoryError) -> Self {
        error.client_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(DirectoryError::not_found("abc").status_code(), 404);
        assert_eq!(DirectoryError::MissingRequiredFields.status_code(), 400);
        assert_eq!(
            DirectoryError::storage(StorageOp::Save, "disk full").status_code(),
            500
        );
        assert_eq!(
            DirectoryError::Configuration("bad port".to_string()).status_code(),
            500
        );
        assert_eq!(DirectoryError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_not_found_body_uses_message_key() {
        let body = DirectoryError::not_found("abc").client_body();
        assert_eq!(body.message.as_deref(), Some(messages::USER_NOT_FOUND));
        assert!(body.error_message.is_none());

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("message").is_some());
        assert!(json.get("errorMessage").is_none());
    }

    #[test]
    fn test_validation_body_uses_error_message_key() {
        let body = DirectoryError::MissingRequiredFields.client_body();
        assert_eq!(
            body.error_message.as_deref(),
            Some(messages::MISSING_NAME_AND_BIO)
        );
        assert!(body.message.is_none());

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("errorMessage").is_some());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_storage_bodies_are_operation_specific() {
        let cases = [
            (StorageOp::List, messages::USERS_NOT_RETRIEVED),
            (StorageOp::Fetch, messages::USER_NOT_RETRIEVED),
            (StorageOp::Save, messages::USER_NOT_SAVED),
            (StorageOp::Update, messages::USER_NOT_MODIFIED),
            (StorageOp::Remove, messages::USER_NOT_REMOVED),
        ];

        for (op, expected) in cases {
            let body = DirectoryError::storage(op, "backend down").client_body();
            assert_eq!(body.error_message.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_storage_detail_stays_out_of_client_body() {
        let err = DirectoryError::storage(StorageOp::Remove, "row lock timeout");
        assert!(err.to_string().contains("row lock timeout"));

        let body = err.client_body();
        assert_eq!(body.error_message.as_deref(), Some(messages::USER_NOT_REMOVED));
    }

    #[test]
    fn test_error_display() {
        let err = DirectoryError::not_found("u-42");
        assert!(err.to_string().contains("u-42"));

        let err = DirectoryError::storage(StorageOp::Update, "timeout");
        assert!(err.to_string().contains("update"));
    }

    #[test]
    fn test_error_body_from_ref() {
        let err = DirectoryError::not_found("abc");
        let body: ErrorBody = ErrorBody::from(&err);
        assert_eq!(body.message.as_deref(), Some(messages::USER_NOT_FOUND));
    }
}

// ABOUTME: Unified error handling with standard error codes for the coach engine
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used at resource boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

//! # Unified Error Handling
//!
//! The prescription and routing cores are total functions: bad input comes
//! back as flags (`needs_calibration`) or unchanged text, never as errors.
//! `AppError` exists for the resource boundary — plan document loading and
//! configuration validation — where an operation can genuinely fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// The data format is invalid
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// A required field is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// The requested resource was not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// A file or stored resource could not be read
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// An unexpected internal error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::StorageError => "A stored resource could not be read",
            Self::ConfigError => "Configuration is missing or invalid",
            Self::InternalError => "An unexpected internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::StorageError => "STORAGE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(name)
    }
}

/// Application error with a standard code and human-readable message
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Standard error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a resource not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code_and_message() {
        let err = AppError::storage("plan document missing");
        assert_eq!(err.to_string(), "STORAGE_ERROR: plan document missing");
    }

    #[test]
    fn test_error_code_serializes_to_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::InvalidInput).unwrap();
        assert_eq!(json, "\"INVALID_INPUT\"");
    }
}

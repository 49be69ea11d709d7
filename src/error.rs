//! Error types for fntag

use crate::infrastructure::provider::ProviderError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fntag
#[derive(Debug, Error)]
pub enum FntagError {
    #[error("Not a fntag workspace: {0}")]
    NotFntagWorkspace(PathBuf),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl FntagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FntagError::NotFntagWorkspace(_) => 2,
            FntagError::InvalidFilter(_) => 3,
            FntagError::InvalidTag(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FntagError::NotFntagWorkspace(path) => {
                format!(
                    "Not a fntag workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'fntag init' in this directory to create a workspace\n\
                    • Navigate to an existing fntag workspace\n\
                    • Set FNTAG_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            FntagError::InvalidFilter(msg) => {
                format!(
                    "No matching resource: {}\n\n\
                    A filter slot needs a key whenever it has a value:\n\
                    • --key1 env --value1 prod\n\
                    • --key1 env (key only, matches any value)\n\n\
                    Examples:\n\
                    fntag filter --key1 env --value1 prod\n\
                    fntag filter --key1 env --key2 team -c or",
                    msg
                )
            }
            FntagError::InvalidTag(msg) => {
                format!(
                    "Invalid tag: {}\n\n\
                    Tags are given as KEY=VALUE:\n\
                    • keys are 1-128 characters, values at most 256\n\
                    • allowed characters: letters, numbers, spaces and _ . : / = + - @\n\
                    • keys starting with 'aws:' are reserved\n\n\
                    Example:\n\
                    fntag apply --arn <ARN> --tag env=prod --tag team=payments",
                    msg
                )
            }
            FntagError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: resource_type, region, created\n\
                        Example: fntag config region eu-west-1",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FntagError
pub type Result<T> = std::result::Result<T, FntagError>;

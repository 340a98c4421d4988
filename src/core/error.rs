//! Error handling for fastfetch
//!
//! Two kinds of failure exist and they are handled very differently:
//!
//! - [`FetchError`] covers problems with the run itself: an unreadable or
//!   malformed config file, an invalid command-line option. These stop the
//!   program and are shown through [`ErrorContext`] with a suggestion.
//! - [`CollectError`] covers a single module that could not find its data.
//!   It never stops the program; the pipeline prints it as that module's
//!   value (when errors are shown) and caches nothing.
//!
//! Cache I/O and format string problems are not errors at all: the cache
//! degrades to a miss and templates degrade to verbatim text.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fastfetch::core::{FetchError, ErrorContext, user_friendly_error};
//!
//! let error = FetchError::InvalidOption {
//!     option: "--set".to_string(),
//!     value: "Weather".to_string(),
//!     reason: "expected KEY=VALUE".to_string(),
//! };
//!
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // colored error with suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// An explicitly requested config file does not exist
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was requested
        path: String,
    },

    /// Config file is not valid TOML or has fields of the wrong type
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Path to the config file
        file: String,
        /// Parser message
        reason: String,
    },

    /// A command-line option has a value that cannot be used
    #[error("Invalid value '{value}' for {option}: {reason}")]
    InvalidOption {
        /// Option name as typed, e.g. `--set`
        option: String,
        /// The offending value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// I/O failure outside the cache (config file reads, stdout)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// A module could not produce a value.
///
/// The `Display` text is what the user sees in place of the module's value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// None of the sources the module reads exist or hold data
    #[error("{message}")]
    Unavailable {
        /// User-visible explanation
        message: String,
    },

    /// A source exists but could not be read
    #[error("Failed to read {path}: {reason}")]
    Unreadable {
        /// File that failed
        path: String,
        /// Underlying error text
        reason: String,
    },

    /// A source was read but its content made no sense
    #[error("Failed to parse {what}: {reason}")]
    Parse {
        /// What was being parsed, e.g. `/proc/uptime`
        what: String,
        /// Why parsing failed
        reason: String,
    },
}

impl CollectError {
    /// Shorthand for [`CollectError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// A [`FetchError`] with optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: FetchError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap `error` without suggestion or details.
    #[must_use]
    pub const fn new(error: FetchError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add explanatory details, shown in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the CLI.
///
/// Known [`FetchError`] variants get tailored suggestions, I/O and TOML errors
/// get generic guidance, everything else is reported with its cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(fetch_error) = error.downcast_ref::<FetchError>() {
        return create_error_context(fetch_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>()
        && io_error.kind() == std::io::ErrorKind::PermissionDenied
    {
        return ErrorContext::new(FetchError::Other {
            message: error.to_string(),
        })
        .with_suggestion("Check the permissions of the config and cache directories");
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(FetchError::ConfigParseError {
            file: "config.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your config file, or regenerate it with --print-default-config");
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(FetchError::Other {
        message,
    })
}

fn create_error_context(error: &FetchError) -> ErrorContext {
    match error {
        FetchError::ConfigNotFound { path } => ErrorContext::new(FetchError::ConfigNotFound {
            path: path.clone(),
        })
        .with_suggestion("Create it with 'fastfetch --print-default-config > <path>' or drop the --config option"),

        FetchError::ConfigParseError { file, reason } => {
            ErrorContext::new(FetchError::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            })
            .with_details(reason.clone())
            .with_suggestion("Fix the TOML syntax, or regenerate the file with --print-default-config")
        }

        FetchError::InvalidOption { option, value, reason } => {
            ErrorContext::new(FetchError::InvalidOption {
                option: option.clone(),
                value: value.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Run 'fastfetch --help' to see the expected form of each option")
        }

        FetchError::IoError(io) => ErrorContext::new(FetchError::Other {
            message: format!("IO error: {io}"),
        })
        .with_suggestion("Check that standard output is still open, e.g. the pipe reader did not exit"),

        FetchError::Other { message } => ErrorContext::new(FetchError::Other {
            message: message.clone(),
        }),
    }
}

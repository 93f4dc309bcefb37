//! Dispatch configuration: build-time policy and dispatch logging.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::defaults::{default_log_unhandled, default_unreachable_case_policy};
use crate::error::ConfigError;

/// How a builder treats cases declared after a catch-all case.
///
/// Such cases can never run. Appending them is a programming error, but not
/// one `build()` refuses; the policy decides how loudly it is reported.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnreachableCasePolicy {
    /// Compile silently.
    Tolerate,
    /// Compile, logging a warning for each unreachable case.
    #[default]
    Warn,
    /// Refuse to compile from `try_build()`; `build()` still warns.
    Reject,
}

/// Errors encountered while parsing an [`UnreachableCasePolicy`] from text.
pub type UnreachableCasePolicyParseError = strum::ParseError;

/// Configuration shared by a builder and the dispatcher it compiles.
///
/// # Defaults
///
/// - `unreachable_cases`: [`UnreachableCasePolicy::Warn`]
/// - `log_unhandled`: `false`
///
/// # Example
///
/// ```
/// use casematch_core::{DispatchConfig, UnreachableCasePolicy};
///
/// let config = DispatchConfig::from_json_str(r#"{"unreachable_cases":"reject"}"#)
///     .expect("valid configuration");
/// assert_eq!(config.unreachable_cases(), UnreachableCasePolicy::Reject);
/// assert!(!config.log_unhandled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Treatment of cases declared after a catch-all case.
    unreachable_cases: UnreachableCasePolicy,
    /// Whether inputs that match no case are logged at debug level.
    log_unhandled: bool,
}

impl DispatchConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(unreachable_cases: UnreachableCasePolicy, log_unhandled: bool) -> Self {
        Self {
            unreachable_cases,
            log_unhandled,
        }
    }

    /// Parses a configuration from a JSON object. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON, names an
    /// unknown field, or uses an unknown policy.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns the unreachable case policy.
    #[must_use]
    pub const fn unreachable_cases(&self) -> UnreachableCasePolicy {
        self.unreachable_cases
    }

    /// Returns whether unhandled inputs are logged.
    #[must_use]
    pub const fn log_unhandled(&self) -> bool {
        self.log_unhandled
    }

    /// Returns a copy with a different unreachable case policy.
    #[must_use]
    pub const fn with_unreachable_cases(mut self, policy: UnreachableCasePolicy) -> Self {
        self.unreachable_cases = policy;
        self
    }

    /// Returns a copy with unhandled-input logging switched on or off.
    #[must_use]
    pub const fn with_log_unhandled(mut self, log_unhandled: bool) -> Self {
        self.log_unhandled = log_unhandled;
        self
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            unreachable_cases: default_unreachable_case_policy(),
            log_unhandled: default_log_unhandled(),
        }
    }
}

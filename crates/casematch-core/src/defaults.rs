//! Default values for [`DispatchConfig`](crate::DispatchConfig).

use crate::config::UnreachableCasePolicy;

/// Default handling of cases declared after a catch-all case.
pub const DEFAULT_UNREACHABLE_CASE_POLICY: UnreachableCasePolicy = UnreachableCasePolicy::Warn;

/// Whether unhandled inputs are logged by default.
pub const DEFAULT_LOG_UNHANDLED: bool = false;

/// Default handling of cases declared after a catch-all case.
#[must_use]
pub const fn default_unreachable_case_policy() -> UnreachableCasePolicy {
    DEFAULT_UNREACHABLE_CASE_POLICY
}

/// Whether unhandled inputs are logged by default.
#[must_use]
pub const fn default_log_unhandled() -> bool {
    DEFAULT_LOG_UNHANDLED
}

//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so CI can scale all suites at once.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const KRUSKAL_PBT_FORK_ENV_KEY: &str = "KRUSKAL_PBT_FORK";

/// Reasons an environment override is ignored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ProfileOverrideError {
    /// The case count was not an unsigned integer.
    #[error("`{raw}` is not an unsigned integer")]
    NotANumber {
        /// The rejected raw value.
        raw: String,
    },
    /// The case count was zero.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("`{raw}` is not one of true/false/1/0/yes/no/on/off")]
    NotABoolean {
        /// The rejected raw value.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Invalid overrides are logged at `warn` and replaced by the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(KRUSKAL_PBT_FORK_ENV_KEY, default_fork, parse_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, ProfileOverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %error,
            "invalid property-test profile override; using default",
        );
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
///
/// Returns [`ProfileOverrideError`] for non-numeric or zero values.
pub fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(ProfileOverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(ProfileOverrideError::NotANumber {
            raw: trimmed.to_owned(),
        }),
    }
}

/// Parses a fork flag.
///
/// # Errors
///
/// Returns [`ProfileOverrideError::NotABoolean`] for unrecognised spellings.
pub fn parse_fork(raw: &str) -> Result<bool, ProfileOverrideError> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::NotABoolean { raw: normalized }),
    }
}

//! Environment overrides for the MST property suites.
//!
//! | Variable | Meaning | Accepted values |
//! |---|---|---|
//! | `PROGTEST_CASES` | cases per property | integer > 0 |
//! | `BORUVKA_PBT_FORK` | run cases in forked subprocesses | `true`/`false`/`1`/`0`/`yes`/`no`/`on`/`off` |
//! | `BORUVKA_MST_PBT_DETERMINISM_REPS` | engine runs per determinism case | integer > 1 |
//!
//! Invalid values fall back to the caller's default with a `warn!`.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const BORUVKA_PBT_FORK_ENV_KEY: &str = "BORUVKA_PBT_FORK";
/// Environment variable controlling determinism repetitions.
pub const DETERMINISM_REPS_ENV_KEY: &str = "BORUVKA_MST_PBT_DETERMINISM_REPS";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the environment, using the given defaults for
    /// unset or invalid variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use boruvka_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: env_override(PROGTEST_CASES_ENV_KEY, default_cases, |raw| {
                parse_count(raw, 1)
            }),
            fork: env_override(BORUVKA_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

/// Returns how many times a determinism property should rerun the engine on
/// one input.
///
/// Values below 2 compare nothing and are rejected.
#[must_use]
pub fn determinism_repetitions(default: usize) -> usize {
    env_override(DETERMINISM_REPS_ENV_KEY, default, |raw| parse_count(raw, 2))
}

#[derive(Debug, Error, PartialEq, Eq)]
enum OverrideError {
    #[error("not a non-negative integer")]
    NotAnInteger,
    #[error("must be at least {minimum}")]
    BelowMinimum { minimum: u8 },
    #[error("expected one of true/false/1/0/yes/no/on/off")]
    NotASwitch,
}

fn env_override<T>(
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_count<T>(raw: &str, minimum: u8) -> Result<T, OverrideError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let value: T = raw.parse().map_err(|_| OverrideError::NotAnInteger)?;
    if value < T::from(minimum) {
        return Err(OverrideError::BelowMinimum { minimum });
    }
    Ok(value)
}

fn parse_switch(raw: &str) -> Result<bool, OverrideError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotASwitch),
    }
}

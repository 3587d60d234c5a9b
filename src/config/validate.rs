//! Startup check that every required key resolves under one of the two naming
//! conventions.

use serde::Serialize;

use super::requirements::{RequiredKey, Requirements};
use super::source::ConfigSource;

const REPORT_HEADER: &str = "Missing required environment variables:";
const REPORT_FOOTER: &str = "Please check your .env.local file.";

/// One or more required keys are unset (or empty) under both names.
///
/// The message is the full rendered report, not just the first key.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MissingConfigurationError {
    message: String,
    missing: Vec<String>,
}

impl MissingConfigurationError {
    /// Canonical names of the unresolved keys, in declaration order.
    pub fn missing(&self) -> &[String] { &self.missing }
}

/// Which naming convention satisfied a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyResolution {
    Canonical,
    Legacy,
    Missing,
}

/// Ordered list of keys left unresolved by one validation pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    missing: Vec<RequiredKey>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool { self.missing.is_empty() }

    pub fn missing(&self) -> &[RequiredKey] { &self.missing }

    /// Multi-line diagnostic: header, blank line, one `   - KEY` per line,
    /// blank line, instruction.
    pub fn render(&self) -> String {
        let mut out = String::from(REPORT_HEADER);
        out.push_str("\n\n");
        for key in &self.missing {
            out.push_str("   - ");
            out.push_str(&key.canonical_name);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(REPORT_FOOTER);
        out
    }

    fn into_error(self) -> MissingConfigurationError {
        let message = self.render();
        let missing = self.missing.into_iter().map(|k| k.canonical_name).collect();
        MissingConfigurationError { message, missing }
    }
}

/// Resolve one key: canonical name first, then the legacy fallback.
pub fn resolve(source: &impl ConfigSource, key: &RequiredKey) -> KeyResolution {
    if source.non_empty(&key.canonical_name).is_some() {
        return KeyResolution::Canonical;
    }
    if source.non_empty(&key.fallback_name).is_some() {
        return KeyResolution::Legacy;
    }
    KeyResolution::Missing
}

/// Collect the unresolved keys without logging anything.
pub fn check(source: &impl ConfigSource, requirements: &Requirements) -> ValidationReport {
    let missing = requirements
        .keys()
        .into_iter()
        .filter(|key| resolve(source, key) == KeyResolution::Missing)
        .collect();
    ValidationReport { missing }
}

/// Fail fast when any required key is unresolved.
///
/// Logs the report at error level and returns it as the error; on success logs a
/// single confirmation line. Reads `source` only.
pub fn validate(
    source: &impl ConfigSource,
    requirements: &Requirements,
) -> Result<(), MissingConfigurationError> {
    let report = check(source, requirements);
    if report.is_empty() {
        tracing::info!("Firebase configuration validated");
        return Ok(());
    }
    let err = report.into_error();
    tracing::error!("{}", err);
    Err(err)
}

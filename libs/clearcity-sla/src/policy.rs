//! SLA policy table
//!
//! One policy record per severity level: how many days a report of that
//! severity gets before its deadline, how close to the deadline the warning
//! zone starts, and a suggested polling cadence for status checks.
//!
//! The built-in table is the production default; operators can override
//! individual values from a YAML file or `CLEARCITY_SLA_*` environment
//! variables via [`load_policy_table`].

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SlaError};
use crate::severity::Severity;

/// SLA policy for one severity level
///
/// The lowercase aliases accept figment's `Env` provider, which lowercases
/// key paths (`CLEARCITY_SLA_CRITICAL__RESOLUTIONDAYS` arrives as
/// `critical.resolutiondays`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaPolicy {
    /// Severity this policy applies to
    pub severity: Severity,
    /// Total days allotted to resolve a report of this severity
    #[serde(alias = "resolutiondays")]
    pub resolution_days: u32,
    /// Hours before the deadline at which the warning zone begins
    #[serde(alias = "warninghours")]
    pub warning_hours: i64,
    /// Suggested polling cadence in hours (informational only)
    #[serde(alias = "checkintervalhours")]
    pub check_interval_hours: u32,
}

/// Full policy table, one entry per severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct PolicyTable {
    #[serde(alias = "low")]
    pub low: SlaPolicy,
    #[serde(alias = "medium")]
    pub medium: SlaPolicy,
    #[serde(alias = "high")]
    pub high: SlaPolicy,
    #[serde(alias = "critical")]
    pub critical: SlaPolicy,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            low: SlaPolicy {
                severity: Severity::Low,
                resolution_days: 7,
                warning_hours: 24,
                check_interval_hours: 12,
            },
            medium: SlaPolicy {
                severity: Severity::Medium,
                resolution_days: 5,
                warning_hours: 12,
                check_interval_hours: 6,
            },
            high: SlaPolicy {
                severity: Severity::High,
                resolution_days: 3,
                warning_hours: 8,
                check_interval_hours: 4,
            },
            critical: SlaPolicy {
                severity: Severity::Critical,
                resolution_days: 2,
                warning_hours: 6,
                check_interval_hours: 2,
            },
        }
    }
}

impl PolicyTable {
    /// Get the policy for a severity level
    pub fn policy(&self, severity: Severity) -> &SlaPolicy {
        match severity {
            Severity::Low => &self.low,
            Severity::Medium => &self.medium,
            Severity::High => &self.high,
            Severity::Critical => &self.critical,
        }
    }

    /// Validate table invariants
    ///
    /// Every entry must have positive durations, and the warning window must
    /// fit inside the resolution window (`warning_hours < resolution_days * 24`).
    pub fn validate(&self) -> Result<()> {
        for severity in Severity::ALL {
            let policy = self.policy(severity);
            if policy.severity != severity {
                return Err(SlaError::invalid_policy(format!(
                    "{severity}: entry is keyed for {}",
                    policy.severity
                )));
            }
            if policy.resolution_days == 0 {
                return Err(SlaError::invalid_policy(format!(
                    "{severity}: resolutionDays must be positive"
                )));
            }
            if policy.warning_hours <= 0 {
                return Err(SlaError::invalid_policy(format!(
                    "{severity}: warningHours must be positive"
                )));
            }
            if policy.check_interval_hours == 0 {
                return Err(SlaError::invalid_policy(format!(
                    "{severity}: checkIntervalHours must be positive"
                )));
            }
            if policy.warning_hours >= i64::from(policy.resolution_days) * 24 {
                return Err(SlaError::invalid_policy(format!(
                    "{severity}: warning window ({}h) does not fit inside the \
                     resolution window ({}d)",
                    policy.warning_hours, policy.resolution_days
                )));
            }
        }
        Ok(())
    }
}

/// Load the policy table with priority: env > file > built-in defaults
///
/// The merged table is validated before it is returned, so a bad override
/// fails at load time rather than producing nonsense deadlines later.
pub fn load_policy_table(path: Option<&Path>) -> Result<PolicyTable> {
    let mut figment = Figment::from(Serialized::defaults(PolicyTable::default()));

    if let Some(path) = path {
        info!(path = %path.display(), "Loading SLA policy overrides");
        figment = figment.merge(Yaml::file(path));
    }

    let table: PolicyTable = figment
        .merge(Env::prefixed("CLEARCITY_SLA_").split("__"))
        .extract()
        .map_err(|e| SlaError::config(e.to_string()))?;

    table.validate()?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that read or mutate CLEARCITY_SLA_* variables;
    // the process environment is shared across test threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_table_is_valid() {
        PolicyTable::default().validate().unwrap();
    }

    #[test]
    fn test_default_table_values() {
        let table = PolicyTable::default();
        assert_eq!(table.policy(Severity::Low).resolution_days, 7);
        assert_eq!(table.policy(Severity::Medium).resolution_days, 5);
        assert_eq!(table.policy(Severity::High).resolution_days, 3);
        assert_eq!(table.policy(Severity::Critical).resolution_days, 2);
        assert_eq!(table.policy(Severity::Medium).warning_hours, 12);
        assert_eq!(table.policy(Severity::Critical).warning_hours, 6);
    }

    #[test]
    fn test_warning_window_must_fit_resolution_window() {
        let mut table = PolicyTable::default();
        // 7 days = 168 hours; a 168h warning window is no longer a "warning"
        table.low.warning_hours = 168;
        assert!(table.validate().is_err());

        table.low.warning_hours = 167;
        table.validate().unwrap();
    }

    #[test]
    fn test_zero_durations_rejected() {
        let mut table = PolicyTable::default();
        table.high.resolution_days = 0;
        assert!(table.validate().is_err());

        let mut table = PolicyTable::default();
        table.high.warning_hours = 0;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_mismatched_severity_key_rejected() {
        let mut table = PolicyTable::default();
        table.low.severity = Severity::High;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_load_without_overrides_yields_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let table = load_policy_table(None).unwrap();
        assert_eq!(table, PolicyTable::default());
    }

    #[test]
    fn test_env_override_applies() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("CLEARCITY_SLA_CRITICAL__RESOLUTIONDAYS", "1");
        let loaded = load_policy_table(None);
        std::env::remove_var("CLEARCITY_SLA_CRITICAL__RESOLUTIONDAYS");

        let table = loaded.unwrap();
        assert_eq!(table.policy(Severity::Critical).resolution_days, 1);
        // untouched values keep their defaults
        assert_eq!(table.policy(Severity::Critical).warning_hours, 6);
        assert_eq!(table.policy(Severity::Low), PolicyTable::default().policy(Severity::Low));
    }

    #[test]
    fn test_invalid_env_override_rejected_at_load() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // a 48h warning zone fills CRITICAL's entire 2-day resolution window
        std::env::set_var("CLEARCITY_SLA_CRITICAL__WARNINGHOURS", "48");
        let loaded = load_policy_table(None);
        std::env::remove_var("CLEARCITY_SLA_CRITICAL__WARNINGHOURS");

        assert!(loaded.is_err());
    }
}

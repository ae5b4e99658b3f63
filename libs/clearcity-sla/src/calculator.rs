//! SLA deadline and status calculator
//!
//! Pure, stateless queries over `(submitted_at, severity, deadline, now)`.
//! The clock is always an explicit `now` parameter; nothing here reads the
//! system time, performs I/O, or holds mutable state, so every method is safe
//! to call concurrently without coordination.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use tracing::debug;

use crate::error::{Result, SlaError};
use crate::policy::PolicyTable;
use crate::severity::Severity;

/// Traffic-light status for a report's SLA state
///
/// Priority-ordered: breached wins over warning, warning over on-track.
/// Breached and warning are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusColor {
    /// On track
    Green,
    /// In the warning zone, deadline approaching
    Amber,
    /// Deadline breached
    Red,
}

impl StatusColor {
    /// Hex color token for presentation
    pub fn hex(&self) -> &'static str {
        match self {
            StatusColor::Green => "#10B981",
            StatusColor::Amber => "#F59E0B",
            StatusColor::Red => "#EF4444",
        }
    }
}

/// SLA calculator over a policy table
#[derive(Debug, Clone, Default)]
pub struct SlaCalculator {
    table: PolicyTable,
}

impl SlaCalculator {
    /// Create a calculator over the given policy table
    pub fn new(table: PolicyTable) -> Self {
        Self { table }
    }

    /// The policy table in use
    pub fn table(&self) -> &PolicyTable {
        &self.table
    }

    /// Parse an ISO-8601 timestamp at the boundary
    ///
    /// Accepts RFC 3339 (`2026-08-30T10:00:00Z`, with offset) or a bare
    /// datetime without zone, which is taken as UTC. Unparseable input is an
    /// explicit error rather than silently propagating a bogus instant.
    pub fn parse_timestamp(&self, value: &str) -> Result<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| SlaError::invalid_timestamp(value.to_string()))
    }

    /// Calculate the SLA deadline for a report
    ///
    /// `severity_label` is free-form and normalized per [`Severity::from_label`];
    /// the deadline is `submitted_at` plus the severity's resolution window.
    pub fn deadline(&self, submitted_at: DateTime<Utc>, severity_label: &str) -> DateTime<Utc> {
        let severity = Severity::from_label(severity_label);
        let policy = self.table.policy(severity);
        let deadline = submitted_at + Duration::days(i64::from(policy.resolution_days));

        debug!(
            severity = %severity,
            resolution_days = policy.resolution_days,
            deadline = %deadline,
            "deadline"
        );

        deadline
    }

    /// Calculate the SLA deadline from a string timestamp
    pub fn deadline_from_str(
        &self,
        submitted_at: &str,
        severity_label: &str,
    ) -> Result<DateTime<Utc>> {
        let submitted = self.parse_timestamp(submitted_at)?;
        Ok(self.deadline(submitted, severity_label))
    }

    /// Whether the deadline has been breached at `now`
    ///
    /// Strictly after: a report queried exactly at its deadline has not
    /// breached yet.
    pub fn has_breached(&self, deadline: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now > deadline
    }

    /// Whole hours remaining until the deadline at `now`
    ///
    /// Floored, so 90 minutes remaining reports 1 and 90 minutes overdue
    /// reports -2. Negative values mean overdue by that many hours; the sign
    /// is meaningful and never clamped.
    pub fn hours_remaining(&self, deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        (deadline - now).num_seconds().div_euclid(3600)
    }

    /// Progress through the resolution window at `now`, as a percentage
    ///
    /// Clamped to `[0, 100]`. A degenerate window (`deadline <= submitted_at`)
    /// reports 100, fully elapsed, rather than erroring; callers rely on this
    /// for malformed legacy records.
    pub fn progress(
        &self,
        submitted_at: DateTime<Utc>,
        deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> f64 {
        let total = (deadline - submitted_at).num_milliseconds();
        if total <= 0 {
            return 100.0;
        }
        let elapsed = (now - submitted_at).num_milliseconds();
        (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Whether the report is in the warning zone at `now`
    ///
    /// True while `0 < hours_remaining <= warningHours` for the severity.
    /// The strict lower bound keeps warning and breached mutually exclusive:
    /// once the deadline passes, the report is breached, not warned.
    pub fn in_warning_zone(
        &self,
        deadline: DateTime<Utc>,
        severity_label: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let severity = Severity::from_label(severity_label);
        let policy = self.table.policy(severity);
        let hours = self.hours_remaining(deadline, now);
        hours > 0 && hours <= policy.warning_hours
    }

    /// Traffic-light status at `now`: breached, warning, or on track
    pub fn status_color(
        &self,
        deadline: DateTime<Utc>,
        severity_label: &str,
        now: DateTime<Utc>,
    ) -> StatusColor {
        if self.has_breached(deadline, now) {
            StatusColor::Red
        } else if self.in_warning_zone(deadline, severity_label, now) {
            StatusColor::Amber
        } else {
            StatusColor::Green
        }
    }

    /// Human-readable time remaining at `now`
    pub fn time_remaining_text(&self, deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let hours = self.hours_remaining(deadline, now);

        if hours < 0 {
            let overdue = -hours;
            if overdue >= 24 {
                return format!("Overdue by {} days", overdue / 24);
            }
            return format!("Overdue by {} hours", overdue);
        }

        if hours < 24 {
            return format!("{} hours remaining", hours);
        }

        let days = hours / 24;
        let remaining_hours = hours % 24;
        if remaining_hours > 0 {
            format!("{}d {}h remaining", days, remaining_hours)
        } else {
            format!("{} days remaining", days)
        }
    }
}

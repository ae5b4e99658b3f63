//! Report severity levels and label normalization

use serde::{Deserialize, Serialize};

/// Report severity
///
/// The reporting subsystem produces free-form labels (`"Low"`, `"CRITICAL"`,
/// `"Urgent"`, ...); [`Severity::from_label`] folds them into these four
/// canonical buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Low severity
    Low,
    /// Medium severity (default bucket)
    Medium,
    /// High severity
    High,
    /// Critical severity
    Critical,
}

impl Severity {
    /// All severity levels, lowest first
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Normalize a free-form severity label
    ///
    /// Matching is case-insensitive and accepts common synonyms
    /// (`EMERGENCY` for critical, `URGENT` for high, `NORMAL` for low).
    /// Labels are matched whole, not trimmed; anything unrecognized,
    /// including empty or padded input, falls back to `Medium`. This
    /// permissive default is contractual: callers rely on graceful
    /// degradation for legacy or partially populated data, so the mapping
    /// is total and never errors.
    pub fn from_label(label: &str) -> Severity {
        match label.to_uppercase().as_str() {
            "CRITICAL" | "EMERGENCY" => Severity::Critical,
            "HIGH" | "URGENT" => Severity::High,
            "LOW" | "NORMAL" => Severity::Low,
            _ => Severity::Medium,
        }
    }

    /// Canonical uppercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_normalization() {
        assert_eq!(Severity::from_label("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::from_label("emergency"), Severity::Critical);
        assert_eq!(Severity::from_label("Urgent"), Severity::High);
        assert_eq!(Severity::from_label("high"), Severity::High);
        assert_eq!(Severity::from_label("normal"), Severity::Low);
        assert_eq!(Severity::from_label("Low"), Severity::Low);
        assert_eq!(Severity::from_label("medium"), Severity::Medium);
    }

    #[test]
    fn test_unrecognized_label_defaults_to_medium() {
        assert_eq!(Severity::from_label(""), Severity::Medium);
        assert_eq!(Severity::from_label("   "), Severity::Medium);
        assert_eq!(Severity::from_label("banana"), Severity::Medium);
        assert_eq!(Severity::from_label("SEVERE"), Severity::Medium);
    }

    #[test]
    fn test_padded_labels_are_not_trimmed() {
        // labels are matched whole; padding falls through to the default
        assert_eq!(Severity::from_label(" low "), Severity::Medium);
        assert_eq!(Severity::from_label(" CRITICAL"), Severity::Medium);
        assert_eq!(Severity::from_label("HIGH "), Severity::Medium);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_label(severity.as_str()), severity);
        }
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");

        let back: Severity = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(back, Severity::Low);
    }
}

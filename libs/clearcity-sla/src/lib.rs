//! clearcity-sla - SLA deadline calculator for Clear City waste reports
//!
//! Derives resolution deadlines from report severity and answers
//! progress/status queries against an injected clock.
//!
//! # Features
//!
//! - **Severity normalization**: free-form labels fold into four canonical levels
//! - **Deadline derivation**: `submitted_at + resolutionDays(severity)`
//! - **Status queries**: breach check, hours remaining, progress percentage,
//!   warning zone, traffic-light color, human-readable countdown
//! - **Policy overrides**: defaults → YAML file → `CLEARCITY_SLA_*` env vars
//!
//! Every query takes `now` as an explicit parameter; the calculator owns no
//! mutable state and never reads the system clock itself.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use clearcity_sla::{SlaCalculator, StatusColor};
//!
//! let calc = SlaCalculator::default();
//!
//! let submitted = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
//! let deadline = calc.deadline(submitted, "Medium");
//! assert_eq!(deadline, submitted + Duration::days(5));
//!
//! // Six hours before the deadline: inside MEDIUM's 12h warning zone
//! let now = deadline - Duration::hours(6);
//! assert_eq!(calc.hours_remaining(deadline, now), 6);
//! assert!(calc.in_warning_zone(deadline, "Medium", now));
//! assert!(!calc.has_breached(deadline, now));
//! assert_eq!(calc.status_color(deadline, "Medium", now), StatusColor::Amber);
//! assert_eq!(calc.time_remaining_text(deadline, now), "6 hours remaining");
//! ```
//!
//! # Severity buckets
//!
//! | Label | Level |
//! |-------|-------|
//! | `CRITICAL`, `EMERGENCY` | CRITICAL |
//! | `HIGH`, `URGENT` | HIGH |
//! | `LOW`, `NORMAL` | LOW |
//! | anything else | MEDIUM (permissive default) |

pub mod calculator;
pub mod error;
pub mod policy;
pub mod severity;

// Re-exports for convenience
pub use calculator::{SlaCalculator, StatusColor};
pub use error::{Result, SlaError};
pub use policy::{load_policy_table, PolicyTable, SlaPolicy};
pub use severity::Severity;

//! Escalation chain
//!
//! A fixed, linear ladder of organizational tiers through which an unresolved
//! report is expected to move: field worker, ward office, municipal
//! corporation, chief engineer, pollution board, tribunal. Each tier carries
//! the number of hours a report may sit unresolved there before the next
//! tier is implicated.
//!
//! The chain is informational lookup data: nothing in this crate advances a
//! report between levels automatically.

use serde::{Deserialize, Serialize};

/// Organizational escalation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscalationLevel {
    /// Field worker (level 0, escalates immediately)
    FieldUnit,
    /// Ward office
    Ward,
    /// BMC central grievance
    Bmc,
    /// Chief Engineer, Solid Waste Management
    ChiefEngineer,
    /// Maharashtra Pollution Control Board
    Mpcb,
    /// National Green Tribunal (terminal)
    Ngt,
}

impl EscalationLevel {
    /// All levels in chain order
    pub const ALL: [EscalationLevel; 6] = [
        EscalationLevel::FieldUnit,
        EscalationLevel::Ward,
        EscalationLevel::Bmc,
        EscalationLevel::ChiefEngineer,
        EscalationLevel::Mpcb,
        EscalationLevel::Ngt,
    ];

    /// Next tier in the chain, `None` at the terminal
    pub fn next(self) -> Option<EscalationLevel> {
        match self {
            EscalationLevel::FieldUnit => Some(EscalationLevel::Ward),
            EscalationLevel::Ward => Some(EscalationLevel::Bmc),
            EscalationLevel::Bmc => Some(EscalationLevel::ChiefEngineer),
            EscalationLevel::ChiefEngineer => Some(EscalationLevel::Mpcb),
            EscalationLevel::Mpcb => Some(EscalationLevel::Ngt),
            EscalationLevel::Ngt => None,
        }
    }

    /// Hours a report may sit unresolved at this tier before the next tier
    /// is implicated
    ///
    /// The field unit escalates immediately; the terminal tier has nowhere
    /// left to go.
    pub fn delay_hours(self) -> u32 {
        match self {
            EscalationLevel::FieldUnit => 0,
            EscalationLevel::Ward => 48,
            EscalationLevel::Bmc => 48,
            EscalationLevel::ChiefEngineer => 72,
            EscalationLevel::Mpcb => 96,
            EscalationLevel::Ngt => 0,
        }
    }

    /// Display name for the tier
    pub fn display_name(self) -> &'static str {
        match self {
            EscalationLevel::FieldUnit => "Field Worker",
            EscalationLevel::Ward => "Ward Office",
            EscalationLevel::Bmc => "BMC Central",
            EscalationLevel::ChiefEngineer => "Chief Engineer (SWM)",
            EscalationLevel::Mpcb => "Pollution Control Board",
            EscalationLevel::Ngt => "National Green Tribunal",
        }
    }

    /// Walk the chain from this tier to the terminal, inclusive
    pub fn chain_from(self) -> ChainWalk {
        ChainWalk {
            current: Some(self),
        }
    }
}

/// Iterator over the escalation chain from a starting tier
#[derive(Debug, Clone)]
pub struct ChainWalk {
    current: Option<EscalationLevel>,
}

impl Iterator for ChainWalk {
    type Item = EscalationLevel;

    fn next(&mut self) -> Option<Self::Item> {
        let level = self.current?;
        self.current = level.next();
        Some(level)
    }
}

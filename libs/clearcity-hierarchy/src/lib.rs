//! clearcity-hierarchy - escalation chain and contact directory
//!
//! Static configuration for the Clear City escalation hierarchy: the linear
//! six-tier escalation chain (field worker through National Green Tribunal)
//! with inter-tier delays, tier display names, and the compiled-in directory
//! of Mumbai ward offices and central authorities.
//!
//! The chain is informational: `delay_hours` describes how long a report may
//! sit unresolved at a tier before the next tier is implicated, but no engine
//! in this workspace advances reports automatically. Escalation is surfaced
//! to users and performed manually.
//!
//! # Example
//!
//! ```rust
//! use clearcity_hierarchy::{contacts_by_level, ward_contact, EscalationLevel};
//!
//! // Walk the full chain from the field worker to the tribunal
//! let chain: Vec<_> = EscalationLevel::FieldUnit.chain_from().collect();
//! assert_eq!(chain.len(), 6);
//! assert_eq!(*chain.last().unwrap(), EscalationLevel::Ngt);
//!
//! // 48 unresolved hours at the ward office implicate BMC central
//! assert_eq!(EscalationLevel::Ward.delay_hours(), 48);
//! assert_eq!(EscalationLevel::Ward.next(), Some(EscalationLevel::Bmc));
//!
//! let bandra = ward_contact("H/W").unwrap();
//! assert_eq!(bandra.area, Some("Bandra"));
//! assert_eq!(contacts_by_level(EscalationLevel::Ward).len(), 24);
//! ```

pub mod chain;
pub mod contacts;

// Re-exports for convenience
pub use chain::{ChainWalk, EscalationLevel};
pub use contacts::{
    central_contact, contacts_by_level, ward_contact, Contact, CENTRAL_CONTACTS, WARD_CONTACTS,
};

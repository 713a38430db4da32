//! triage-core
//!
//! Pure domain types for the emergency-department triage system.
//! No I/O and no rule logic — this is the shared vocabulary between the
//! decision engine and whatever presentation layer calls it.

pub mod models;

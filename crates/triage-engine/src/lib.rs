//! triage-engine
//!
//! The emergency-department triage evaluator. Pure data and rules — no
//! network dependency. Defines the symptom catalog, the vital-sign
//! threshold table, the ordered evaluation pipeline, and OPD routing for
//! GREEN-tag patients.
//!
//! The evaluation order is the clinical policy: ambulance arrival, then RED
//! vitals, RED symptoms, YELLOW vitals, YELLOW symptoms, GREEN symptoms,
//! and finally the routine default. The first match wins, except that
//! YELLOW and GREEN symptom scans collect every checked symptom in their
//! class before answering.

pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod routing;
pub mod vitals;

pub use catalog::{Severity, SymptomCatalog, SymptomEntry};
pub use error::{CatalogError, TriageError};
pub use evaluate::evaluate;

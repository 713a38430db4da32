pub mod health;
pub mod symptoms;
pub mod triage;

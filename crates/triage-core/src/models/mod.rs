pub mod department;
pub mod patient;
pub mod result;

//! Employer-only pages, mounted under `/employer` behind the role guard.

pub mod dashboard;
pub mod leads;
pub mod managers;

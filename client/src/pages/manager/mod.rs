//! Manager-only pages, mounted under `/manager` behind the role guard.

pub mod leads;

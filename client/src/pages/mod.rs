//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, dialogs, toasts) and
//! delegates rendering details to `components`. Role-specific pages live in
//! `employer` and `manager`; only `login` is public.

pub mod employer;
pub mod login;
pub mod manager;

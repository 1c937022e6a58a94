//! Shared client-side state modules.
//!
//! State is split by domain (`session`, `expenses`, `approvals`) so
//! individual pages can depend on small focused models. State structs are
//! plain data held in `RwSignal` contexts; free async orchestrator
//! functions, generic over [`crate::net::api::Api`], drive them.

pub mod approvals;
pub mod expenses;
pub mod list;
pub mod session;

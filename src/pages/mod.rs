//! Routed pages.

pub mod approvals;
pub mod expense_detail;
pub mod expense_list;
pub mod home;
pub mod login;
pub mod not_found;

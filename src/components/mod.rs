//! Reusable view components.

pub mod add_expense_modal;
pub mod approval_action_modal;
pub mod expense_table;
pub mod layout;
pub mod pagination;
pub mod status_badge;

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Expenses below this amount (in IDR) are auto-approved by the server
/// and never reach the approval queue.
pub const AUTO_APPROVAL_THRESHOLD_IDR: u64 = 1_000_000;

/// Role attached to the authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Employee,
}

/// The authenticated user's profile, as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
}

/// Lifecycle status of an expense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    AwaitingApproval,
    Approved,
    Rejected,
    Completed,
}

impl ExpenseStatus {
    /// Wire spelling, used for the `status` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingApproval => "awaiting_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }
}

/// Owner summary embedded in list rows and detail views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// An expense as it appears in list responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub amount_idr: u64,
    pub description: String,
    pub receipt_url: Option<String>,
    pub status: ExpenseStatus,
    pub requires_approval: bool,
    pub auto_approved: bool,
    pub created_at: String,
    pub user: UserSummary,
}

/// Decision recorded by a manager. At most one per expense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecision {
    Approved,
    Rejected,
}

/// The approval record attached to a processed expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    pub id: u64,
    pub approver_id: u64,
    pub approver_name: String,
    pub approver_email: String,
    #[serde(rename = "status")]
    pub decision: ApprovalDecision,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Extended expense shape returned by `GET /expenses/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDetail {
    pub id: u64,
    pub amount_idr: u64,
    pub description: String,
    pub receipt_url: Option<String>,
    pub status: ExpenseStatus,
    pub requires_approval: bool,
    pub auto_approved: bool,
    pub created_at: String,
    pub processed_at: Option<String>,
    pub user: UserSummary,
    pub approval: Option<ApprovalRecord>,
}

/// Body for `POST /expenses`. `receipt_url` serializes as `null` when
/// absent; the server distinguishes null from missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount_idr: u64,
    pub description: String,
    pub receipt_url: Option<String>,
}

/// Which slice of expenses a list request asks for. The approval queue
/// is only meaningful for managers; the server enforces that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    Personal,
    ApprovalQueue,
}

impl ListView {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::ApprovalQueue => "approval_queue",
        }
    }
}

/// Filter and pagination state owned by each list store instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseFilters {
    pub status: Option<ExpenseStatus>,
    pub auto_approved: bool,
    pub limit: u32,
    pub offset: u32,
}

impl Default for ExpenseFilters {
    fn default() -> Self {
        Self { status: None, auto_approved: false, limit: 5, offset: 0 }
    }
}

/// Partial filter update, as submitted by the list page controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub status: Option<ExpenseStatus>,
    pub auto_approved: bool,
}

impl ExpenseFilters {
    /// Apply a partial update. The status filter and the auto-approved
    /// flag are mutually exclusive; auto-approved wins if both are set.
    /// Any change resets the offset to 0.
    pub fn apply(&mut self, update: FilterUpdate) {
        self.offset = 0;
        if update.auto_approved {
            self.status = None;
            self.auto_approved = true;
        } else {
            self.auto_approved = false;
            self.status = update.status;
        }
    }

    /// Query pairs for `GET /expenses`. Status / auto-approved filters
    /// are sent for the personal view only; the approval queue is
    /// pre-filtered server-side.
    pub fn query_pairs(&self, view: ListView) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("view", view.as_str().to_owned()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if view == ListView::Personal {
            if let Some(status) = self.status {
                pairs.push(("status", status.as_str().to_owned()));
            } else if self.auto_approved {
                pairs.push(("auto_approved", "true".to_owned()));
            }
        }
        pairs
    }
}

/// One page of a list response: rows plus the unfiltered total.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpensePage {
    pub items: Vec<Expense>,
    pub total: u64,
}

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// List envelope: `{"data": [...], "meta": {"total": n}}`.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

#[derive(Debug, Deserialize)]
pub struct ListMeta {
    pub total: u64,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub access_token: Option<String>,
}

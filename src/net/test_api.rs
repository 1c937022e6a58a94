//! Scripted [`Api`] mock shared by store and guard tests.
//!
//! Each endpoint pops its next scripted result; an unscripted call
//! fails with a network error. Every call is appended to `calls` so
//! tests can assert on count, order, and payloads.

use std::cell::RefCell;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{
    CreateExpenseRequest, Expense, ExpenseDetail, ExpenseFilters, ExpensePage, ExpenseStatus,
    ListView, Role, User, UserSummary,
};

#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<String>>,
    pub login_results: RefCell<Vec<Result<String, ApiError>>>,
    pub logout_results: RefCell<Vec<Result<(), ApiError>>>,
    pub me_results: RefCell<Vec<Result<User, ApiError>>>,
    pub list_results: RefCell<Vec<Result<ExpensePage, ApiError>>>,
    pub detail_results: RefCell<Vec<Result<ExpenseDetail, ApiError>>>,
    pub create_results: RefCell<Vec<Result<(), ApiError>>>,
    pub approve_results: RefCell<Vec<Result<(), ApiError>>>,
    pub reject_results: RefCell<Vec<Result<(), ApiError>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn next<T>(queue: &RefCell<Vec<Result<T, ApiError>>>) -> Result<T, ApiError> {
        if queue.borrow().is_empty() {
            return Err(ApiError::Network("no scripted response".to_owned()));
        }
        queue.borrow_mut().remove(0)
    }
}

impl Api for MockApi {
    async fn login(&self, email: &str, _password: &str) -> Result<String, ApiError> {
        self.record(format!("login {email}"));
        Self::next(&self.login_results)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout".to_owned());
        Self::next(&self.logout_results)
    }

    async fn fetch_me(&self) -> Result<User, ApiError> {
        self.record("me".to_owned());
        Self::next(&self.me_results)
    }

    async fn list_expenses(
        &self,
        view: ListView,
        filters: &ExpenseFilters,
    ) -> Result<ExpensePage, ApiError> {
        let query = filters
            .query_pairs(view)
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        self.record(format!("list {query}"));
        Self::next(&self.list_results)
    }

    async fn fetch_expense(&self, id: u64) -> Result<ExpenseDetail, ApiError> {
        self.record(format!("detail {id}"));
        Self::next(&self.detail_results)
    }

    async fn create_expense(&self, req: &CreateExpenseRequest) -> Result<(), ApiError> {
        self.record(format!("create {}", serde_json::to_string(req).unwrap()));
        Self::next(&self.create_results)
    }

    async fn approve_expense(&self, id: u64, notes: Option<&str>) -> Result<(), ApiError> {
        self.record(format!("approve id={id} notes={notes:?}"));
        Self::next(&self.approve_results)
    }

    async fn reject_expense(&self, id: u64, notes: Option<&str>) -> Result<(), ApiError> {
        self.record(format!("reject id={id} notes={notes:?}"));
        Self::next(&self.reject_results)
    }
}

// Fixture builders.

pub fn user(role: Role) -> User {
    User {
        id: 7,
        email: "dina@example.com".to_owned(),
        name: "Dina".to_owned(),
        role,
        created_at: "2025-01-05T08:30:00Z".to_owned(),
    }
}

pub fn expense(id: u64) -> Expense {
    Expense {
        id,
        amount_idr: 250_000,
        description: format!("Expense {id}"),
        receipt_url: None,
        status: ExpenseStatus::AwaitingApproval,
        requires_approval: true,
        auto_approved: false,
        created_at: "2025-02-10T10:00:00Z".to_owned(),
        user: UserSummary { id: 7, name: "Dina".to_owned(), email: "dina@example.com".to_owned() },
    }
}

pub fn detail(id: u64) -> ExpenseDetail {
    ExpenseDetail {
        id,
        amount_idr: 250_000,
        description: format!("Expense {id}"),
        receipt_url: None,
        status: ExpenseStatus::AwaitingApproval,
        requires_approval: true,
        auto_approved: false,
        created_at: "2025-02-10T10:00:00Z".to_owned(),
        processed_at: None,
        user: UserSummary { id: 7, name: "Dina".to_owned(), email: "dina@example.com".to_owned() },
        approval: None,
    }
}

pub fn page(ids: &[u64], total: u64) -> ExpensePage {
    ExpensePage { items: ids.iter().copied().map(expense).collect(), total }
}

//! Borrow requests and lending records.
//!
//! Approval and availability bookkeeping happen server-side; the client only
//! relays the owner's or borrower's decision and re-renders the result.

use crate::net::client::{HttpMethod, get_json, request_empty, request_json, with_query};
use crate::net::error::ApiError;
use crate::net::types::{BorrowRequest, BorrowRequestInput, LendingRecord};

const REQUESTS_PATH: &str = "/api/borrow-requests";
pub(crate) const LENDING_RECORDS_PATH: &str = "/api/lending-records";

/// Which side of a borrow request the caller is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorrowRole {
    Borrower,
    Owner,
}

impl BorrowRole {
    pub fn as_str(self) -> &'static str {
        match self {
            BorrowRole::Borrower => "borrower",
            BorrowRole::Owner => "owner",
        }
    }
}

/// Owner decision on a pending request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn as_str(self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

pub(crate) fn requests_path(role: BorrowRole) -> String {
    with_query(REQUESTS_PATH, &[("role", Some(role.as_str().to_owned()))])
}

pub(crate) fn request_path(id: i64) -> String {
    format!("{REQUESTS_PATH}/{id}")
}

pub(crate) fn decision_path(id: i64, decision: Decision) -> String {
    format!("{REQUESTS_PATH}/{id}/{}", decision.as_str())
}

pub(crate) fn return_path(id: i64) -> String {
    format!("{LENDING_RECORDS_PATH}/{id}/return")
}

/// # Errors
///
/// Transport/status errors.
pub async fn list_requests(role: BorrowRole) -> Result<Vec<BorrowRequest>, ApiError> {
    get_json(&requests_path(role)).await
}

/// # Errors
///
/// Status errors carry the backend's reason (e.g. unavailable dates).
pub async fn create_request(input: &BorrowRequestInput) -> Result<BorrowRequest, ApiError> {
    request_json(HttpMethod::Post, REQUESTS_PATH, Some(input)).await
}

/// # Errors
///
/// `Forbidden` when the caller does not own the instance.
pub async fn approve(id: i64) -> Result<BorrowRequest, ApiError> {
    decide(id, Decision::Approve).await
}

/// # Errors
///
/// `Forbidden` when the caller does not own the instance.
pub async fn reject(id: i64) -> Result<BorrowRequest, ApiError> {
    decide(id, Decision::Reject).await
}

async fn decide(id: i64, decision: Decision) -> Result<BorrowRequest, ApiError> {
    request_json::<(), _>(HttpMethod::Put, &decision_path(id, decision), None).await
}

/// Withdraw one of the caller's own requests.
///
/// # Errors
///
/// Transport/status errors.
pub async fn cancel(id: i64) -> Result<(), ApiError> {
    request_empty::<()>(HttpMethod::Delete, &request_path(id), None).await
}

/// Loans where the caller is lender or borrower.
///
/// # Errors
///
/// Transport/status errors.
pub async fn lending_records() -> Result<Vec<LendingRecord>, ApiError> {
    get_json(LENDING_RECORDS_PATH).await
}

/// # Errors
///
/// Transport/status errors.
pub async fn mark_returned(id: i64) -> Result<LendingRecord, ApiError> {
    request_json::<(), _>(HttpMethod::Put, &return_path(id), None).await
}

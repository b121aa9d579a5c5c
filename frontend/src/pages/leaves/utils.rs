use crate::{
    api::{ApiError, Leave, LeavePayload, LeaveStatus, LeaveType},
    utils::{
        listing::Searchable,
        time::{leave_days, parse_api_date},
    },
};
use serde::{Deserialize, Serialize};

pub const LEAVES_PATH: &str = "/admin-dashboard/leaves";
pub const ADD_LEAVE_PATH: &str = "/employee-dashboard/add-leave";
pub const EMPLOYEE_HOME_PATH: &str = "/employee-dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::Pending,
        StatusFilter::Approved,
        StatusFilter::Rejected,
        StatusFilter::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Approved => "Approved",
            StatusFilter::Rejected => "Rejected",
        }
    }

    pub fn matches(&self, status: LeaveStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == LeaveStatus::Pending,
            StatusFilter::Approved => status == LeaveStatus::Approved,
            StatusFilter::Rejected => status == LeaveStatus::Rejected,
        }
    }
}

/// A leave as shown on the admin table, which searches more fields than the
/// employee's own history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminLeave(pub Leave);

impl Searchable for AdminLeave {
    type Filter = StatusFilter;

    fn search_fields(&self) -> Vec<&str> {
        let leave = &self.0;
        vec![
            leave.employee_code(),
            leave.employee_name(),
            leave.leave_type.as_str(),
            leave.department_name(),
            leave.status.as_str(),
        ]
    }

    fn passes(&self, filter: &StatusFilter) -> bool {
        filter.matches(self.0.status)
    }

    fn normalize_query(query: &str) -> &str {
        query.trim()
    }
}

impl Searchable for Leave {
    type Filter = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.leave_type.as_str(), self.reason.as_str(), self.status.as_str()]
    }
}

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "bg-green-100 text-green-800 border-green-200",
        LeaveStatus::Pending => "bg-yellow-100 text-yellow-800 border-yellow-200",
        LeaveStatus::Rejected => "bg-red-100 text-red-800 border-red-200",
        LeaveStatus::Unknown => "bg-gray-100 text-gray-800 border-gray-200",
    }
}

pub fn result_count_label(count: usize) -> String {
    match count {
        1 => "Found 1 result".into(),
        n => format!("Found {} results", n),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveFormState {
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl LeaveFormState {
    /// Inclusive day count once both dates are picked.
    pub fn requested_days(&self) -> Option<i64> {
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return None;
        }
        leave_days(&self.start_date, &self.end_date)
    }

    pub fn to_payload(&self) -> Result<LeavePayload, ApiError> {
        let start = parse_api_date(&self.start_date)
            .ok_or_else(|| ApiError::validation("Start date is required"))?;
        let end = parse_api_date(&self.end_date)
            .ok_or_else(|| ApiError::validation("End date is required"))?;
        if end < start {
            return Err(ApiError::validation("End date cannot be before start date"));
        }
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(ApiError::validation("Reason is required"));
        }
        Ok(LeavePayload {
            leave_type: self.leave_type,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            reason: reason.to_string(),
        })
    }
}

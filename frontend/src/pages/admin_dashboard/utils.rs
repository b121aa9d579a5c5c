use crate::{api::DashboardSummary, components::cards::CardAccent, utils::format::format_currency};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCardData {
    pub title: &'static str,
    pub value: String,
    pub accent: CardAccent,
}

impl SummaryCardData {
    fn new(title: &'static str, value: impl ToString, accent: CardAccent) -> Self {
        Self {
            title,
            value: value.to_string(),
            accent,
        }
    }
}

pub fn overview_cards(summary: &DashboardSummary) -> Vec<SummaryCardData> {
    vec![
        SummaryCardData::new("Total Employees", summary.total_employees, CardAccent::Teal),
        SummaryCardData::new("Total Departments", summary.total_departments, CardAccent::Yellow),
        SummaryCardData::new(
            "Monthly Payroll",
            format_currency(summary.total_salary),
            CardAccent::Red,
        ),
    ]
}

pub fn leave_cards(summary: &DashboardSummary) -> Vec<SummaryCardData> {
    let leaves = &summary.leave_summary;
    vec![
        SummaryCardData::new("Leave Applied", summary.leave_requests(), CardAccent::Teal),
        SummaryCardData::new("Leave Approved", leaves.approved, CardAccent::Green),
        SummaryCardData::new("Leave Pending", leaves.pending, CardAccent::Yellow),
        SummaryCardData::new("Leave Rejected", leaves.rejected, CardAccent::Red),
    ]
}

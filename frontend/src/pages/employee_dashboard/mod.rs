pub mod panel;

pub use panel::EmployeeSummaryPage;

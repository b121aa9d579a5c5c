pub mod admin_table;
pub mod detail;
pub mod form;
pub mod history;

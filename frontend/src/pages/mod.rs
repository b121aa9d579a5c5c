pub mod admin_dashboard;
pub mod departments;
pub mod employee_dashboard;
pub mod employees;
pub mod home;
pub mod leaves;
pub mod login;
pub mod salaries;
pub mod settings;
pub mod shell;
pub mod unauthorized;

use leptos::*;
use leptos_router::use_params_map;

/// Reads a path parameter once; detail pages are remounted when the route changes.
pub fn route_param(name: &str) -> String {
    use_params_map().with_untracked(|params| params.get(name).cloned().unwrap_or_default())
}

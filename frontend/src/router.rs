use leptos::*;
use leptos_router::*;

use crate::{
    components::toast::ToastHost,
    pages::{
        admin_dashboard::AdminSummaryPage,
        departments::{AddDepartmentPage, DepartmentListPage, EditDepartmentPage},
        employee_dashboard::EmployeeSummaryPage,
        employees::{AddEmployeePage, EditEmployeePage, EmployeeListPage, EmployeeProfilePage},
        home::HomePage,
        leaves::{AddLeavePage, AdminLeavesPage, LeaveDetailPage, LeaveHistoryPage},
        login::LoginPage,
        salaries::{AddSalaryPage, SalaryHistoryPage},
        settings::SettingsPage,
        shell::{AdminDashboard, EmployeeDashboard},
        unauthorized::UnauthorizedPage,
    },
    state::{auth::AuthProvider, toast::provide_toasts},
};

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin-dashboard",
    "/admin-dashboard/departments",
    "/admin-dashboard/add-department",
    "/admin-dashboard/departments/:id",
    "/admin-dashboard/employees",
    "/admin-dashboard/add-employee",
    "/admin-dashboard/employees/:id",
    "/admin-dashboard/employees/edit/:id",
    "/admin-dashboard/employees/salary/:id",
    "/admin-dashboard/employees/leaves/:id",
    "/admin-dashboard/salary/add",
    "/admin-dashboard/leaves",
    "/admin-dashboard/leaves/:id",
    "/admin-dashboard/settings",
];

pub const EMPLOYEE_ROUTE_PATHS: &[&str] = &[
    "/employee-dashboard",
    "/employee-dashboard/profile/:id",
    "/employee-dashboard/leaves/:id",
    "/employee-dashboard/add-leave",
    "/employee-dashboard/salary/:id",
    "/employee-dashboard/settings",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/unauthorized"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_toasts();
    view! {
        <AuthProvider>
            <ToastHost />
            <Router>
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/login" view=LoginPage />
                    <Route path="/unauthorized" view=UnauthorizedPage />
                    <Route path="/admin-dashboard" view=AdminDashboard>
                        <Route path="" view=AdminSummaryPage />
                        <Route path="departments" view=DepartmentListPage />
                        <Route path="add-department" view=AddDepartmentPage />
                        <Route path="departments/:id" view=EditDepartmentPage />
                        <Route path="employees" view=EmployeeListPage />
                        <Route path="add-employee" view=AddEmployeePage />
                        <Route path="employees/:id" view=EmployeeProfilePage />
                        <Route path="employees/edit/:id" view=EditEmployeePage />
                        <Route path="employees/salary/:id" view=SalaryHistoryPage />
                        <Route path="employees/leaves/:id" view=LeaveHistoryPage />
                        <Route path="salary/add" view=AddSalaryPage />
                        <Route path="leaves" view=AdminLeavesPage />
                        <Route path="leaves/:id" view=LeaveDetailPage />
                        <Route path="settings" view=SettingsPage />
                    </Route>
                    <Route path="/employee-dashboard" view=EmployeeDashboard>
                        <Route path="" view=EmployeeSummaryPage />
                        <Route path="profile/:id" view=EmployeeProfilePage />
                        <Route path="leaves/:id" view=LeaveHistoryPage />
                        <Route path="add-leave" view=AddLeavePage />
                        <Route path="salary/:id" view=SalaryHistoryPage />
                        <Route path="settings" view=SettingsPage />
                    </Route>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::{admin_nav_items, employee_nav_items};
    use std::collections::HashSet;

    fn all_paths() -> Vec<&'static str> {
        PUBLIC_ROUTE_PATHS
            .iter()
            .chain(ADMIN_ROUTE_PATHS)
            .chain(EMPLOYEE_ROUTE_PATHS)
            .copied()
            .collect()
    }

    /// True when `path` fits `pattern`, treating `:param` segments as wildcards.
    fn matches(pattern: &str, path: &str) -> bool {
        let pattern: Vec<&str> = pattern.split('/').collect();
        let path: Vec<&str> = path.split('/').collect();
        pattern.len() == path.len()
            && pattern
                .iter()
                .zip(&path)
                .all(|(p, s)| p.starts_with(':') || p == s)
    }

    #[test]
    fn no_duplicate_routes() {
        let all = all_paths();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn dashboards_are_scoped_by_prefix() {
        assert!(ADMIN_ROUTE_PATHS.iter().all(|p| p.starts_with("/admin-dashboard")));
        assert!(EMPLOYEE_ROUTE_PATHS.iter().all(|p| p.starts_with("/employee-dashboard")));
    }

    #[test]
    fn every_sidebar_link_has_a_route() {
        let links = admin_nav_items()
            .into_iter()
            .chain(employee_nav_items("u-employee"));
        for item in links {
            assert!(
                all_paths().iter().any(|pattern| matches(pattern, &item.path)),
                "sidebar link without route: {}",
                item.path
            );
        }
    }

    #[test]
    fn guard_redirect_targets_are_public() {
        use crate::components::guard::{LOGIN_PATH, UNAUTHORIZED_PATH};
        assert!(PUBLIC_ROUTE_PATHS.contains(&LOGIN_PATH));
        assert!(PUBLIC_ROUTE_PATHS.contains(&UNAUTHORIZED_PATH));
    }

    #[test]
    fn entity_routes_use_normalized_names() {
        assert!(ADMIN_ROUTE_PATHS.contains(&"/admin-dashboard/employees/:id"));
        assert!(ADMIN_ROUTE_PATHS.contains(&"/admin-dashboard/add-department"));
        assert!(EMPLOYEE_ROUTE_PATHS.contains(&"/employee-dashboard/add-leave"));
        for legacy in [
            "/admin-dashboard/employee",
            "/admin-dashboard/add-departments",
            "/employee-dashboard/leaves/add-leaves",
        ] {
            assert!(!all_paths().contains(&legacy), "unexpected route {}", legacy);
        }
    }
}

use crate::{
    api::Role,
    components::{
        guard::RequireRole,
        layout::{admin_nav_items, employee_nav_items, DashboardShell},
    },
    state::auth::use_auth,
};
use leptos::*;
use leptos_router::Outlet;

pub const ADMIN_ROLES: &[Role] = &[Role::Admin];
pub const EMPLOYEE_ROLES: &[Role] = &[Role::Admin, Role::Employee];

/// Parent route for `/admin-dashboard/*`.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <RequireRole allowed=ADMIN_ROLES>
            {|| view! {
                <DashboardShell title="Admin Panel" items=Signal::derive(admin_nav_items)>
                    <Outlet />
                </DashboardShell>
            }}
        </RequireRole>
    }
}

/// Parent route for `/employee-dashboard/*`; sidebar links carry the session user's id.
#[component]
pub fn EmployeeDashboard() -> impl IntoView {
    let (auth, _) = use_auth();
    let items = Signal::derive(move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| employee_nav_items(&user.id))
                .unwrap_or_default()
        })
    });

    view! {
        <RequireRole allowed=EMPLOYEE_ROLES>
            {move || view! {
                <DashboardShell title="Employee Panel" items=items>
                    <Outlet />
                </DashboardShell>
            }}
        </RequireRole>
    }
}

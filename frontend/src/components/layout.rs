use crate::{
    api::Role,
    state::{auth::{self, use_auth}, toast::use_toast},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: String,
    pub label: &'static str,
}

impl NavItem {
    fn new(path: impl Into<String>, label: &'static str) -> Self {
        Self {
            path: path.into(),
            label,
        }
    }
}

pub fn admin_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("/admin-dashboard", "Dashboard"),
        NavItem::new("/admin-dashboard/employees", "Employees"),
        NavItem::new("/admin-dashboard/departments", "Departments"),
        NavItem::new("/admin-dashboard/leaves", "Leaves"),
        NavItem::new("/admin-dashboard/salary/add", "Salary"),
        NavItem::new("/admin-dashboard/settings", "Settings"),
    ]
}

/// Employee links are keyed by the session user's id.
pub fn employee_nav_items(user_id: &str) -> Vec<NavItem> {
    vec![
        NavItem::new("/employee-dashboard", "Dashboard"),
        NavItem::new(format!("/employee-dashboard/profile/{}", user_id), "Profile"),
        NavItem::new(format!("/employee-dashboard/leaves/{}", user_id), "Leaves"),
        NavItem::new(format!("/employee-dashboard/salary/{}", user_id), "Salary"),
        NavItem::new("/employee-dashboard/settings", "Settings"),
    ]
}

#[component]
pub fn Sidebar(#[prop(into)] title: String, items: Signal<Vec<NavItem>>) -> impl IntoView {
    view! {
        <aside class="hidden md:flex md:flex-col w-64 min-h-screen bg-teal-700 text-white">
            <div class="h-16 flex items-center px-6 border-b border-teal-600">
                <h1 class="text-lg font-semibold">{title}</h1>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                <For
                    each=move || items.get()
                    key=|item| item.path.clone()
                    children=move |item: NavItem| {
                        view! {
                            <a
                                href=item.path.clone()
                                class="block px-3 py-2 rounded-md text-sm font-medium text-teal-50 hover:bg-teal-600"
                            >
                                {item.label}
                            </a>
                        }
                    }
                />
            </nav>
        </aside>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let toast = use_toast();
    let logout = auth::use_logout();

    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };
    let role_label = move || match auth.get().role() {
        Some(Role::Admin) => "Administrator",
        Some(Role::Employee) => "Employee",
        _ => "",
    };
    let initial = move || {
        user_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".into())
    };

    let on_logout = move |_| {
        logout.call(());
        toast.success("Logged out successfully");
        navigation::redirect("/login");
    };

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="px-6 h-16 flex items-center justify-between">
                <p class="text-gray-700">
                    "Welcome back, "
                    <span class="font-semibold text-teal-600">{user_name}</span>
                </p>
                <div class="flex items-center gap-4">
                    <div class="flex items-center gap-2">
                        <span class="h-9 w-9 rounded-full bg-teal-600 text-white flex items-center justify-center font-semibold">
                            {initial}
                        </span>
                        <div class="hidden sm:block">
                            <p class="text-sm font-semibold text-gray-800">{user_name}</p>
                            <p class="text-xs text-gray-500">{role_label}</p>
                        </div>
                    </div>
                    <button
                        type="button"
                        class="px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                        on:click=on_logout
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Sidebar, navbar and a content slot; the dashboards put their `Outlet` inside.
#[component]
pub fn DashboardShell(
    #[prop(into)] title: String,
    items: Signal<Vec<NavItem>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-gray-50">
            <Sidebar title=title items=items />
            <div class="flex-1 flex flex-col">
                <Navbar />
                <main class="flex-1 p-6">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] back_href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mb-6 flex flex-col gap-2 md:flex-row md:items-end md:justify-between">
            <div>
                <h2 class="text-2xl font-bold text-gray-800">{title}</h2>
                {subtitle.map(|text| view! { <p class="text-gray-600">{text}</p> })}
            </div>
            {back_href.map(|href| view! {
                <a href=href class="text-sm font-medium text-teal-600 hover:text-teal-800">"← Back"</a>
            })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-teal-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_links_embed_user_id() {
        let items = employee_nav_items("u42");
        assert!(items
            .iter()
            .any(|item| item.path == "/employee-dashboard/leaves/u42"));
        assert!(items
            .iter()
            .any(|item| item.path == "/employee-dashboard/salary/u42"));
    }

    #[test]
    fn admin_links_stay_under_admin_dashboard() {
        assert!(admin_nav_items()
            .iter()
            .all(|item| item.path.starts_with("/admin-dashboard")));
    }
}

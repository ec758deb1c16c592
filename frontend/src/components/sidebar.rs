use leptos::*;
use leptos_router::{use_location, use_navigate};

use crate::{api::UserResponse, state::auth::use_auth};

pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub struct NavSection {
    pub heading: &'static str,
    pub items: &'static [NavItem],
}

pub const ATTENDANCE_SECTION: NavSection = NavSection {
    heading: "CHECK-IN CHECK-OUT",
    items: &[
        NavItem {
            label: "Check In",
            path: "/attendance/checkin",
            icon: "fa-sign-in-alt",
        },
        NavItem {
            label: "Check Out",
            path: "/attendance/checkout",
            icon: "fa-sign-out-alt",
        },
        NavItem {
            label: "History",
            path: "/attendance/history",
            icon: "fa-history",
        },
    ],
};

pub const LEAVE_SECTION: NavSection = NavSection {
    heading: "LEAVE MANAGEMENT",
    items: &[
        NavItem {
            label: "Request",
            path: "/leave-request/request",
            icon: "fa-calendar",
        },
        NavItem {
            label: "History",
            path: "/leave-request/history",
            icon: "fa-history",
        },
    ],
};

pub const ADMIN_SECTION: NavSection = NavSection {
    heading: "ADMIN DASHBOARD",
    items: &[
        NavItem {
            label: "Create Employee",
            path: "/dashboard/create-employee",
            icon: "fa-user",
        },
        NavItem {
            label: "Approve Leave",
            path: "/dashboard/approve-leave",
            icon: "fa-check",
        },
    ],
};

// A button is highlighted only on an exact path match; no prefix matching.
pub fn is_active(current_path: &str, target: &str) -> bool {
    current_path == target
}

// Exact, case-sensitive role match. Anything else, including a missing
// session, counts as a regular employee.
pub fn is_admin_session(user: Option<&UserResponse>) -> bool {
    user.map(|u| u.role == "admin").unwrap_or(false)
}

fn active_button_class(active: bool) -> &'static str {
    if active {
        "bg-blue-100 text-blue-600 dark:bg-blue-300/10"
    } else {
        ""
    }
}

#[component]
fn NavButton(item: &'static NavItem) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let active = create_memo(move |_| is_active(&location.pathname.get(), item.path));

    view! {
        <button
            class=move || {
                format!(
                    "flex items-center w-full px-3 py-2 rounded-md text-sm font-medium text-left transition-colors hover:bg-gray-100 dark:hover:bg-gray-800 {}",
                    active_button_class(active.get())
                )
            }
            on:click=move |_| navigate(item.path, Default::default())
        >
            <i class=format!("fas {} mr-2", item.icon)></i>
            <span>{item.label}</span>
        </button>
    }
}

#[component]
fn NavGroup(section: &'static NavSection) -> impl IntoView {
    view! {
        <div class="flex flex-col space-y-5 w-full">
            <h2 class="text-sm text-gray-500">{section.heading}</h2>
            <div class="flex flex-col space-y-3 w-full">
                {section
                    .items
                    .iter()
                    .map(|item| view! { <NavButton item=item/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SideBar(children: Children) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let show_admin = create_memo(move |_| is_admin_session(auth.get().user.as_ref()));

    view! {
        <div class="flex flex-row flex-1 max-w-screen">
            <aside class="w-64 border-r border-gray-200 dark:border-gray-800 p-5">
                <nav class="flex flex-col space-y-5 w-full">
                    <NavGroup section=&ATTENDANCE_SECTION/>
                    <NavGroup section=&LEAVE_SECTION/>
                    <Show when=move || show_admin.get()>
                        <NavGroup section=&ADMIN_SECTION/>
                    </Show>
                </nav>
            </aside>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> UserResponse {
        UserResponse {
            id: "u1".into(),
            employee_id: "E0001".into(),
            name: "Alice Example".into(),
            email: "alice@example.com".into(),
            role: role.into(),
        }
    }

    #[test]
    fn active_only_on_exact_path_match() {
        assert!(is_active("/attendance/checkin", "/attendance/checkin"));
        assert!(!is_active("/attendance/checkout", "/attendance/checkin"));
        assert!(!is_active("/attendance/checkin/", "/attendance/checkin"));
        assert!(!is_active("/attendance", "/attendance/checkin"));
        assert!(!is_active("/", "/attendance/checkin"));
    }

    #[test]
    fn admin_check_is_exact_and_case_sensitive() {
        assert!(is_admin_session(Some(&user_with_role("admin"))));
        assert!(!is_admin_session(Some(&user_with_role("Admin"))));
        assert!(!is_admin_session(Some(&user_with_role("ADMIN"))));
        assert!(!is_admin_session(Some(&user_with_role("employee"))));
        assert!(!is_admin_session(Some(&user_with_role(""))));
        assert!(!is_admin_session(None));
    }

    #[test]
    fn sections_cover_expected_targets() {
        let attendance: Vec<_> = ATTENDANCE_SECTION.items.iter().map(|i| i.path).collect();
        assert_eq!(
            attendance,
            vec![
                "/attendance/checkin",
                "/attendance/checkout",
                "/attendance/history"
            ]
        );

        let leave: Vec<_> = LEAVE_SECTION.items.iter().map(|i| i.path).collect();
        assert_eq!(leave, vec!["/leave-request/request", "/leave-request/history"]);

        let admin: Vec<_> = ADMIN_SECTION.items.iter().map(|i| i.path).collect();
        assert_eq!(
            admin,
            vec!["/dashboard/create-employee", "/dashboard/approve-leave"]
        );
    }

    #[test]
    fn admin_targets_live_under_the_dashboard() {
        for item in ADMIN_SECTION.items {
            assert!(item.path.starts_with("/dashboard/"), "{}", item.path);
        }
    }

    #[test]
    fn active_class_applied_only_when_active() {
        assert!(active_button_class(true).contains("bg-blue-100"));
        assert_eq!(active_button_class(false), "");
    }
}

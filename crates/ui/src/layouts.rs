//! Layout shells
//!
//! The public landing shell (navbar + footer) and the four role shells
//! (sidebar + header + footer). Role shells gate their children: a
//! visitor whose user type does not match is bounced to the landing page.
//! Entering any dashboard shell also resets the table editing session so
//! a half-finished edit cannot leak across screens.

use dioxus::prelude::*;
use esp_core::Role;

use crate::router::Route;
use crate::state::{
    EditingAction, SESSION, SessionAction, dispatch_editing, dispatch_session,
};
use crate::components::ToastOverlay;

// ============================================================================
// Public shell
// ============================================================================

const PUBLIC_NAV: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Company", "/company"),
    ("About Sports", "/about-sports"),
    ("Subscription", "/subscription"),
    ("Contact Us", "/contact-us"),
];

/// Landing shell: fixed navbar, routed content, footer.
#[component]
pub fn PublicLayout() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-white",
            Navbar {}
            main { class: "flex-1 pt-16",
                Outlet::<Route> {}
            }
            Footer {}
            ToastOverlay {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "bg-white shadow fixed top-0 left-0 w-full z-40",
            div { class: "mx-auto max-w-7xl px-2 sm:px-6 lg:px-8",
                div { class: "relative flex h-16 justify-between items-center",
                    h1 { class: "font-bold text-2xl text-blue-600", "EasySportsPass" }
                    div { class: "flex gap-6 items-center",
                        div { class: "hidden sm:flex sm:space-x-8",
                            for (name, to) in PUBLIC_NAV.iter() {
                                Link {
                                    class: "inline-flex items-center border-b-2 border-transparent px-1 pt-1 text-sm font-medium text-gray-500 hover:border-gray-300 hover:text-gray-700",
                                    to: to.to_string(),
                                    "{name}"
                                }
                            }
                        }
                        div { class: "flex gap-4 items-center",
                            Link {
                                class: "rounded-md bg-blue-600 px-3 py-2 text-sm font-medium text-white hover:bg-blue-500",
                                to: Route::Memberships {},
                                "Sign up"
                            }
                            Link {
                                class: "text-sm font-medium text-gray-700 hover:text-gray-900",
                                to: Route::Login {},
                                "Log in"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "bg-gray-900 text-gray-400 py-8",
            div { class: "mx-auto max-w-7xl px-6 flex flex-col sm:flex-row justify-between gap-4",
                p { "© 2024 Sports Club Inc. All rights reserved." }
                div { class: "flex gap-4",
                    a { href: "https://github.com/", class: "hover:text-white", "GitHub" }
                    a { href: "https://linkedin.com/", class: "hover:text-white", "LinkedIn" }
                    a { href: "https://instagram.com/", class: "hover:text-white", "Instagram" }
                    a { href: "https://facebook.com/", class: "hover:text-white", "Facebook" }
                }
            }
        }
    }
}

// ============================================================================
// Role shells
// ============================================================================

/// Sidebar entry of a dashboard shell
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
}

/// True when a signed-in user of a different type is on this shell.
/// Visitors with no session are not bounced; the pages behind the shell
/// fail their own calls and the backend rejects anything sensitive.
fn role_mismatch(role: Option<Role>, required: Role) -> bool {
    matches!(role, Some(actual) if actual != required)
}

/// Shared dashboard chrome. Redirects when the session's role does not
/// match `required`.
#[component]
fn RoleShell(required: Role, title: &'static str, nav: Vec<NavItem>) -> Element {
    let nav_hook = use_navigator();
    let role = SESSION.read().role();

    // Any lingering edit session belongs to a previous screen.
    use_effect(|| {
        dispatch_editing(EditingAction::Reset);
    });

    use_effect(move || {
        if role_mismatch(SESSION.read().role(), required) {
            nav_hook.replace(Route::Home {});
        }
    });

    if role_mismatch(role, required) {
        return rsx! {};
    }

    let user_name = SESSION
        .read()
        .user
        .as_ref()
        .map(|u| u.full_name())
        .unwrap_or_default();

    rsx! {
        div { class: "min-h-screen bg-gray-100",
            // Sidebar
            aside { class: "fixed inset-y-0 left-0 w-72 bg-gray-900 text-white hidden lg:flex flex-col px-6 py-6",
                p { class: "pb-6 w-full text-2xl font-bold text-white", "EasySportsPass" }
                nav { class: "flex flex-col gap-1",
                    for item in nav.iter() {
                        Link {
                            class: "rounded-md px-3 py-2 text-sm font-medium text-gray-300 hover:bg-gray-800 hover:text-white",
                            to: item.route.clone(),
                            "{item.name}"
                        }
                    }
                }
                div { class: "mt-auto",
                    SignOutButton {}
                }
            }
            div { class: "lg:pl-72",
                header { class: "flex h-16 items-center justify-between border-b border-gray-200 bg-white px-4 sm:px-6 lg:px-8",
                    p { class: "text-sm font-semibold text-gray-900", "{title}" }
                    div { class: "flex items-center gap-4",
                        span { class: "text-sm text-gray-700", "{user_name}" }
                        Link {
                            class: "text-sm text-blue-600 hover:text-blue-500",
                            to: profile_route(required),
                            "Edit profile"
                        }
                        SignOutButton {}
                    }
                }
                main { class: "min-h-[calc(100vh-10rem)] py-4 px-4 sm:px-6 lg:px-8",
                    Outlet::<Route> {}
                }
            }
            Footer {}
            ToastOverlay {}
        }
    }
}

fn profile_route(role: Role) -> Route {
    match role {
        Role::Administrator => Route::AdminManageProfile {},
        Role::Supplier => Route::SupplierManageProfile {},
        Role::Corporate => Route::CorporateManageProfile {},
        Role::Normal => Route::UserManageProfile {},
    }
}

#[component]
fn SignOutButton() -> Element {
    let nav = use_navigator();
    rsx! {
        button {
            class: "text-sm text-gray-400 hover:text-gray-200",
            onclick: move |_| {
                dispatch_session(SessionAction::Logout);
                nav.push(Route::Login {});
            },
            "Sign out"
        }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    rsx! {
        RoleShell {
            required: Role::Administrator,
            title: "Administrator",
            nav: vec![
                NavItem { name: "Home", route: Route::AdminHome {} },
                NavItem { name: "Membership Plans", route: Route::AdminMembershipPlans {} },
                NavItem { name: "Manage Users", route: Route::AdminManageUsers {} },
                NavItem { name: "Country", route: Route::AdminCountry {} },
                NavItem { name: "State", route: Route::AdminState {} },
                NavItem { name: "City", route: Route::AdminCity {} },
                NavItem { name: "Plan Attribute", route: Route::AdminPlanAttributes {} },
                NavItem { name: "Corporate Users", route: Route::AdminCorporateUsers {} },
                NavItem { name: "Suppliers", route: Route::AdminSuppliers {} },
            ],
        }
    }
}

#[component]
pub fn SupplierLayout() -> Element {
    rsx! {
        RoleShell {
            required: Role::Supplier,
            title: "Supplier",
            nav: vec![
                NavItem { name: "Activities", route: Route::SupplierActivities {} },
                NavItem { name: "Manage Supplier Profile", route: Route::SupplierProfile {} },
                NavItem { name: "Check In", route: Route::SupplierCheckIn {} },
            ],
        }
    }
}

#[component]
pub fn CorporateLayout() -> Element {
    rsx! {
        RoleShell {
            required: Role::Corporate,
            title: "Corporate",
            nav: vec![
                NavItem { name: "Plan Attributes", route: Route::CorporatePlanAttributes {} },
                NavItem { name: "Manage Plan", route: Route::CorporateMembers {} },
                NavItem { name: "Manage Corporate Profile", route: Route::CorporateManageProfile {} },
            ],
        }
    }
}

#[component]
pub fn UserLayout() -> Element {
    rsx! {
        RoleShell {
            required: Role::Normal,
            title: "Member",
            nav: vec![
                NavItem { name: "Activities", route: Route::UserActivities {} },
                NavItem { name: "Edit Profile", route: Route::UserManageProfile {} },
            ],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role_mismatch_gates_other_roles_only() {
        assert!(role_mismatch(Some(Role::Supplier), Role::Administrator));
        assert!(!role_mismatch(Some(Role::Administrator), Role::Administrator));
        assert!(!role_mismatch(None, Role::Administrator));
    }

    #[test]
    fn test_profile_route_per_role() {
        assert_eq!(profile_route(Role::Normal), Route::UserManageProfile {});
        assert_eq!(profile_route(Role::Supplier), Route::SupplierManageProfile {});
    }
}

use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        fonts::FontProvider,
        guard::{RequireAdmin, RequireAuth},
        theme::ThemeProvider,
    },
    pages::{
        ApproveLeavePage, AttendanceHistoryPage, CheckInPage, CheckOutPage, CreateEmployeePage,
        HomePage, LeaveHistoryPage, LeaveRequestPage, LoginPage,
    },
    state::{auth::AuthProvider, store::StoreProvider},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/attendance/checkin",
    "/attendance/checkout",
    "/attendance/history",
    "/leave-request/request",
    "/leave-request/history",
    "/dashboard/create-employee",
    "/dashboard/approve-leave",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/attendance/checkin",
    "/attendance/checkout",
    "/attendance/history",
    "/leave-request/request",
    "/leave-request/history",
    "/dashboard/create-employee",
    "/dashboard/approve-leave",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/dashboard/create-employee", "/dashboard/approve-leave"];

pub fn mount_app() {
    mount_to_body(app_root);
}

// Theme, session, store, and font providers wrap the routed page tree, in
// that order.
pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <ThemeProvider>
            <AuthProvider>
                <StoreProvider>
                    <FontProvider>
                        <Router>
                            <Routes>
                                <Route path="/" view=HomePage/>
                                <Route path="/login" view=LoginPage/>
                                <Route path="/attendance/checkin" view=ProtectedCheckIn/>
                                <Route path="/attendance/checkout" view=ProtectedCheckOut/>
                                <Route path="/attendance/history" view=ProtectedAttendanceHistory/>
                                <Route path="/leave-request/request" view=ProtectedLeaveRequest/>
                                <Route path="/leave-request/history" view=ProtectedLeaveHistory/>
                                <Route path="/dashboard/create-employee" view=AdminCreateEmployee/>
                                <Route path="/dashboard/approve-leave" view=AdminApproveLeave/>
                            </Routes>
                        </Router>
                    </FontProvider>
                </StoreProvider>
            </AuthProvider>
        </ThemeProvider>
    }
}

#[component]
fn ProtectedCheckIn() -> impl IntoView {
    view! { <RequireAuth><CheckInPage/></RequireAuth> }
}

#[component]
fn ProtectedCheckOut() -> impl IntoView {
    view! { <RequireAuth><CheckOutPage/></RequireAuth> }
}

#[component]
fn ProtectedAttendanceHistory() -> impl IntoView {
    view! { <RequireAuth><AttendanceHistoryPage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveRequest() -> impl IntoView {
    view! { <RequireAuth><LeaveRequestPage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveHistory() -> impl IntoView {
    view! { <RequireAuth><LeaveHistoryPage/></RequireAuth> }
}

#[component]
fn AdminCreateEmployee() -> impl IntoView {
    view! { <RequireAdmin><CreateEmployeePage/></RequireAdmin> }
}

#[component]
fn AdminApproveLeave() -> impl IntoView {
    view! { <RequireAdmin><ApproveLeavePage/></RequireAdmin> }
}

use leptos::*;

use crate::{
    api::{ApiClient, ApiError, CreateEmployeeRequest},
    components::{
        error::InlineErrorMessage,
        layout::{Layout, SuccessMessage},
    },
};

pub const ROLES: &[&str] = &["employee", "admin"];

const MIN_PASSWORD_LEN: usize = 8;

fn validate_employee_form(
    employee_id: &str,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<CreateEmployeeRequest, String> {
    let employee_id = employee_id.trim();
    if employee_id.is_empty() {
        return Err("Enter an employee ID.".to_string());
    }
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter the employee's name.".to_string());
    }
    let email = email.trim();
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        ));
    }
    if !ROLES.contains(&role) {
        return Err("Select a role.".to_string());
    }
    Ok(CreateEmployeeRequest {
        employee_id: employee_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: role.to_string(),
    })
}

#[component]
pub fn CreateEmployeePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let employee_id = create_rw_signal(String::new());
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(String::from("employee"));
    let message = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);

    let on_submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        message.set(None);
        success.set(None);
        let request = match validate_employee_form(
            &employee_id.get_untracked(),
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &role.get_untracked(),
        ) {
            Ok(request) => request,
            Err(text) => {
                message.set(Some(ApiError::validation(text)));
                return;
            }
        };
        pending.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.create_employee(request).await {
                Ok(created) => {
                    success.set(Some(format!("Employee {} created.", created.employee_id)));
                    employee_id.set(String::new());
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    role.set(String::from("employee"));
                }
                Err(err) => message.set(Some(err)),
            }
            pending.set(false);
        });
    };

    view! {
        <Layout>
            <div class="space-y-6 max-w-xl">
                <div>
                    <h1 class="text-2xl font-bold">"Create Employee"</h1>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        "New accounts can sign in right away."
                    </p>
                </div>

                <div class="rounded-lg border border-gray-200 dark:border-gray-800 p-4 space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Employee ID"</label>
                        <input
                            type="text"
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            prop:value={move || employee_id.get()}
                            on:input=move |ev| employee_id.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Name"</label>
                        <input
                            type="text"
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            prop:value={move || name.get()}
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Email"</label>
                        <input
                            type="email"
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            prop:value={move || email.get()}
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Temporary password"</label>
                        <input
                            type="password"
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            prop:value={move || password.get()}
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Role"</label>
                        <select
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            {ROLES
                                .iter()
                                .map(|value| {
                                    view! {
                                        <option value=*value selected=move || role.get() == *value>
                                            {*value}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <button
                        class="w-full px-4 py-2 bg-blue-600 text-white font-semibold rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled={move || pending.get()}
                        on:click=on_submit
                    >
                        <i class="fas fa-user mr-2"></i>
                        {move || if pending.get() { "Creating..." } else { "Create employee" }}
                    </button>
                </div>

                <InlineErrorMessage error={message.into()} />
                <Show when=move || success.get().is_some()>
                    <SuccessMessage message={success.get().unwrap_or_default()} />
                </Show>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_builds_request() {
        let request = validate_employee_form(
            " E0042 ",
            "New Hire",
            "hire@example.com",
            "changeme123",
            "employee",
        )
        .unwrap();
        assert_eq!(request.employee_id, "E0042");
        assert_eq!(request.role, "employee");
    }

    #[test]
    fn rejects_blank_identity_fields() {
        assert!(
            validate_employee_form("", "New Hire", "a@b.c", "changeme123", "employee").is_err()
        );
        assert!(validate_employee_form("E1", "  ", "a@b.c", "changeme123", "employee").is_err());
    }

    #[test]
    fn rejects_invalid_email() {
        let err =
            validate_employee_form("E1", "New Hire", "not-an-email", "changeme123", "employee")
                .unwrap_err();
        assert!(err.contains("email"));
    }

    #[test]
    fn rejects_short_password() {
        let err = validate_employee_form("E1", "New Hire", "a@b.c", "short", "employee")
            .unwrap_err();
        assert!(err.contains("Password"));
    }

    #[test]
    fn rejects_unknown_role() {
        let err = validate_employee_form("E1", "New Hire", "a@b.c", "changeme123", "owner")
            .unwrap_err();
        assert!(err.contains("role"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_at_path;

    #[test]
    fn create_employee_page_renders_form() {
        let html = render_at_path("/dashboard/create-employee", move || {
            provide_auth(Some(admin_user()));
            view! { <CreateEmployeePage /> }
        });
        assert!(html.contains("Create Employee"));
        assert!(html.contains("Employee ID"));
        assert!(html.contains("Role"));
    }
}

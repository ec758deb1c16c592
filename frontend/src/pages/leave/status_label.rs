use leptos::*;

pub fn leave_status_label(value: &str) -> String {
    match value {
        "pending" => "Pending".to_string(),
        "approved" => "Approved".to_string(),
        "denied" => "Denied".to_string(),
        _ => value.to_string(),
    }
}

pub fn leave_status_classes(value: &str) -> &'static str {
    match value {
        "pending" => "bg-yellow-100 text-yellow-800",
        "approved" => "bg-green-100 text-green-800",
        "denied" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[component]
pub fn StatusLabel(#[prop(into)] status: String) -> impl IntoView {
    let label = leave_status_label(&status);
    let classes = leave_status_classes(&status);
    view! {
        <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", classes)>
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::{leave_status_classes, leave_status_label};

    #[test]
    fn leave_status_label_maps_known_values() {
        assert_eq!(leave_status_label("pending"), "Pending".to_string());
        assert_eq!(leave_status_label("approved"), "Approved".to_string());
        assert_eq!(leave_status_label("denied"), "Denied".to_string());
    }

    #[test]
    fn leave_status_label_handles_unknown_values() {
        assert_eq!(leave_status_label("unexpected"), "unexpected".to_string());
    }

    #[test]
    fn leave_status_classes_distinguish_outcomes() {
        assert!(leave_status_classes("pending").contains("yellow"));
        assert!(leave_status_classes("approved").contains("green"));
        assert!(leave_status_classes("denied").contains("red"));
        assert!(leave_status_classes("unexpected").contains("gray"));
    }
}

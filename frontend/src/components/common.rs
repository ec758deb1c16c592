use leptos::{ev::MouseEvent, *};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 hover:bg-blue-700 text-white font-semibold shadow-sm"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-gray-100 text-gray-700 dark:text-gray-200 dark:hover:bg-gray-800"
            }
            ButtonVariant::Danger => {
                "bg-red-600 hover:bg-red-700 text-white font-semibold shadow-sm"
            }
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn button_renders_children_and_variant_class() {
        let html = render_to_string(move || {
            view! { <Button variant=ButtonVariant::Danger>"Deny"</Button> }
        });
        assert!(html.contains("Deny"));
        assert!(html.contains("bg-red-600"));
    }

    #[test]
    fn loading_button_shows_spinner() {
        let html = render_to_string(move || {
            view! { <Button loading=true>"Save"</Button> }
        });
        assert!(html.contains("animate-spin"));
    }
}

use crate::state::store::{use_store, AppFont};
use leptos::*;

// Applies the store's selected font class around the page tree.
#[component]
pub fn FontProvider(children: Children) -> impl IntoView {
    let store = use_store();

    view! {
        <div class=move || store.font.get().as_class()>
            {children()}
        </div>
    }
}

#[component]
pub fn FontSelect() -> impl IntoView {
    let store = use_store();
    let store_for_change = store.clone();

    view! {
        <select
            class="rounded-md border border-gray-300 dark:border-gray-700 bg-transparent px-2 py-1 text-sm"
            aria-label="Font"
            on:change=move |ev| {
                if let Some(font) = AppFont::from_storage_key(&event_target_value(&ev)) {
                    store_for_change.set_font(font);
                }
            }
        >
            {AppFont::ALL
                .into_iter()
                .map(|font| {
                    let store = store.clone();
                    view! {
                        <option
                            value=font.storage_key()
                            selected=move || store.font.get() == font
                        >
                            {font.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::store::StoreState;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn font_provider_applies_selected_font_class() {
        let html = render_to_string(move || {
            let store = StoreState::load();
            store.font.set(AppFont::Kanit);
            provide_context(store);
            view! { <FontProvider><span>"text"</span></FontProvider> }
        });
        assert!(html.contains("font-kanit"));
        assert!(html.contains("text"));
    }

    #[test]
    fn font_select_lists_all_fonts() {
        let html = render_to_string(move || view! { <FontSelect /> });
        assert!(html.contains("Inter"));
        assert!(html.contains("Roboto"));
        assert!(html.contains("Kanit"));
    }
}

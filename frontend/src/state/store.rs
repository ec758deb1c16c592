use leptos::*;

use crate::utils::storage;

const FONT_STORAGE_KEY: &str = "app_font";

// Fonts offered in the header's font picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppFont {
    #[default]
    Inter,
    Roboto,
    Kanit,
}

impl AppFont {
    pub const ALL: [AppFont; 3] = [AppFont::Inter, AppFont::Roboto, AppFont::Kanit];

    pub fn as_class(&self) -> &'static str {
        match self {
            AppFont::Inter => "font-inter",
            AppFont::Roboto => "font-roboto",
            AppFont::Kanit => "font-kanit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppFont::Inter => "Inter",
            AppFont::Roboto => "Roboto",
            AppFont::Kanit => "Kanit",
        }
    }

    pub fn storage_key(&self) -> &'static str {
        match self {
            AppFont::Inter => "inter",
            AppFont::Roboto => "roboto",
            AppFont::Kanit => "kanit",
        }
    }

    pub fn from_storage_key(key: &str) -> Option<Self> {
        match key {
            "inter" => Some(AppFont::Inter),
            "roboto" => Some(AppFont::Roboto),
            "kanit" => Some(AppFont::Kanit),
            _ => None,
        }
    }
}

// Application-level state provided once at the root and read anywhere.
#[derive(Clone)]
pub struct StoreState {
    pub font: RwSignal<AppFont>,
}

impl StoreState {
    pub fn load() -> Self {
        let font = storage::get_item(FONT_STORAGE_KEY)
            .ok()
            .flatten()
            .as_deref()
            .and_then(AppFont::from_storage_key)
            .unwrap_or_default();
        Self {
            font: create_rw_signal(font),
        }
    }

    pub fn set_font(&self, font: AppFont) {
        self.font.set(font);
        let _ = storage::set_item(FONT_STORAGE_KEY, font.storage_key());
    }
}

#[component]
pub fn StoreProvider(children: Children) -> impl IntoView {
    let store = StoreState::load();
    provide_context(store);
    view! { <>{children()}</> }
}

pub fn use_store() -> StoreState {
    use_context::<StoreState>().unwrap_or_else(StoreState::load)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn font_classes_are_distinct() {
        let classes: Vec<_> = AppFont::ALL.iter().map(|f| f.as_class()).collect();
        assert_eq!(classes, vec!["font-inter", "font-roboto", "font-kanit"]);
    }

    #[test]
    fn storage_key_round_trips() {
        for font in AppFont::ALL {
            assert_eq!(AppFont::from_storage_key(font.storage_key()), Some(font));
        }
        assert_eq!(AppFont::from_storage_key("comic-sans"), None);
    }

    #[test]
    fn set_font_persists_selection() {
        with_runtime(|| {
            let _ = storage::remove_item(FONT_STORAGE_KEY);
            let store = StoreState::load();
            assert_eq!(store.font.get_untracked(), AppFont::Inter);

            store.set_font(AppFont::Kanit);
            assert_eq!(
                storage::get_item(FONT_STORAGE_KEY).unwrap().as_deref(),
                Some("kanit")
            );

            let reloaded = StoreState::load();
            assert_eq!(reloaded.font.get_untracked(), AppFont::Kanit);
            let _ = storage::remove_item(FONT_STORAGE_KEY);
        });
    }
}

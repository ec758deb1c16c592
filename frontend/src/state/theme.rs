use leptos::*;

use crate::utils::storage;

const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        if system_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn storage_key(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_storage_key(key: &str) -> Option<Self> {
        match key {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    // Stored choice wins over the system preference.
    fn load() -> Self {
        storage::get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .as_deref()
            .and_then(Theme::from_storage_key)
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(Theme::load()),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        let _ = storage::set_item(THEME_STORAGE_KEY, theme.storage_key());
        self.apply_to_dom();
    }

    pub fn toggle(&self) {
        let new_theme = match self.theme.get() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set_theme(new_theme);
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_to_dom(&self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(root) = document.document_element() {
                let class_list = root.class_list();
                let _ = class_list.remove_1("dark");
                let class = self.theme.get_untracked().as_class();
                if !class.is_empty() {
                    let _ = class_list.add_1(class);
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_to_dom(&self) {}

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(ThemeState::new)
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state.clone());
    state.apply_to_dom();
    state
}

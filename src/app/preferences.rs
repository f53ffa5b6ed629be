use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::prefs::{LANGUAGE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::prefs::{Language, Theme};

/// Theme and language for the whole page. The raw stored strings are the
/// source of truth; `theme` and `language` are derived from them.
#[derive(Debug, Clone, Copy)]
pub struct Preferences {
    pub theme: Signal<Theme>,
    pub language: Signal<Language>,
    set_stored_theme: WriteSignal<String>,
    set_stored_language: WriteSignal<String>,
}

impl Preferences {
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {next}");
        self.set_stored_theme.set(next.to_string());
    }

    pub fn toggle_language(&self) {
        let next = self.language.get_untracked().toggled();
        log::debug!("language -> {next}");
        self.set_stored_language.set(next.to_string());
    }
}

pub fn provide_preferences() -> Preferences {
    #[cfg(feature = "hydrate")]
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    #[cfg(feature = "hydrate")]
    let (stored_language, set_stored_language, _) =
        use_local_storage::<String, FromToStringCodec>(LANGUAGE_STORAGE_KEY);

    // the server has no storage; render the defaults and let hydration fix up
    #[cfg(not(feature = "hydrate"))]
    let (stored_theme, set_stored_theme) = signal(String::new());
    #[cfg(not(feature = "hydrate"))]
    let (stored_language, set_stored_language) = signal(String::new());

    let prefers_dark = use_preferred_dark();
    let theme = Signal::derive(move || Theme::resolve(&stored_theme.get(), prefers_dark.get()));
    let language = Signal::derive(move || Language::from_stored(&stored_language.get()));

    Effect::new(move |_| apply_theme(theme.get()));

    let prefs = Preferences {
        theme,
        language,
        set_stored_theme,
        set_stored_language,
    };
    provide_context(prefs);
    prefs
}

/// The stylesheet keys dark mode off a `dark` class on the root element.
fn apply_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
            log::warn!("couldn't apply theme {theme}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = theme;
}

use std::sync::Arc;

use leptos::{either::Either, prelude::*};

use super::{preferences::Preferences, scroll::scroll_to_section};
use crate::{
    config::SITE_CONFIG,
    content::Translations,
    tracker::{NavigationState, Section},
};

#[component]
pub fn Navigation(text: Signal<Arc<Translations>>) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let prefs = expect_context::<Preferences>();
    let nav_bar_height = SITE_CONFIG.tracker.nav_bar_height;

    let go_to = move |section: Section| scroll_to_section(nav, section, nav_bar_height);
    let is_dark = move || prefs.theme.get().is_dark();

    let desktop_item = move |section: Section, label: String| {
        view! {
            <button
                on:click=move |_| go_to(section)
                class=move || {
                    if nav.with(|n| n.is_active(section)) {
                        "px-3 py-2 rounded-lg whitespace-nowrap bg-blue-100 dark:bg-blue-900/30 text-blue-600 dark:text-blue-400"
                    } else {
                        "px-3 py-2 rounded-lg whitespace-nowrap text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400"
                    }
                }
            >
                <span class="text-sm xl:text-base">{label}</span>
            </button>
        }
    };

    let mobile_item = move |section: Section, label: String| {
        view! {
            <button
                on:click=move |_| go_to(section)
                class=move || {
                    let base = "block w-full px-4 py-3 text-left rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800";
                    if nav.with(|n| n.is_active(section)) {
                        format!("{base} text-blue-600 dark:text-blue-400")
                    } else {
                        format!("{base} text-gray-600 dark:text-gray-300")
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class=move || {
            if nav.with(NavigationState::is_scrolled) {
                "fixed top-0 inset-x-0 z-50 transition-all duration-500 nav-enhanced shadow-lg"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-all duration-500 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <button
                        class="text-2xl font-bold gradient-text-animated"
                        on:click=move |_| go_to(Section::Home)
                    >
                        {move || text.get().name.clone()}
                    </button>

                    <div class="hidden lg:flex space-x-6 xl:space-x-8">
                        {move || {
                            text.get()
                                .nav
                                .items()
                                .into_iter()
                                .map(|(section, label)| desktop_item(section, label))
                                .collect_view()
                        }}
                    </div>

                    <div class="hidden lg:flex items-center space-x-2 ml-4">
                        <button
                            on:click=move |_| prefs.toggle_theme()
                            class="p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                            title=move || {
                                if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                            }
                        >
                            {move || if is_dark() { "☀" } else { "☾" }}
                        </button>
                        <button
                            on:click=move |_| prefs.toggle_language()
                            class="p-2 rounded-lg text-sm font-medium text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                            title="Switch language"
                        >
                            {move || prefs.language.get().as_str().to_uppercase()}
                        </button>
                    </div>

                    <button
                        on:click=move |_| nav.update(NavigationState::toggle_menu)
                        class="lg:hidden p-2 ml-auto rounded-lg text-2xl text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                        aria-label="Toggle menu"
                    >
                        {move || if nav.with(NavigationState::is_menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>

                {move || {
                    if !nav.with(NavigationState::is_menu_open) {
                        return Either::Left(());
                    }
                    Either::Right(
                        view! {
                            <div class="lg:hidden py-4 border-t border-gray-200 dark:border-gray-700">
                                <div class="flex items-center justify-center space-x-4 mb-4 pb-4 border-b border-gray-200 dark:border-gray-700">
                                    <button
                                        on:click=move |_| prefs.toggle_theme()
                                        class="px-4 py-2 rounded-lg bg-gray-100 dark:bg-gray-700 text-sm"
                                    >
                                        {move || if is_dark() { "☀ Light" } else { "☾ Dark" }}
                                    </button>
                                    <button
                                        on:click=move |_| prefs.toggle_language()
                                        class="px-4 py-2 rounded-lg bg-gray-100 dark:bg-gray-700 text-sm"
                                    >
                                        {move || prefs.language.get().switch_label()}
                                    </button>
                                </div>
                                {text
                                    .get()
                                    .nav
                                    .items()
                                    .into_iter()
                                    .map(|(section, label)| mobile_item(section, label))
                                    .collect_view()}
                            </div>
                        },
                    )
                }}
            </div>
        </nav>
    }
}

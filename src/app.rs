mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod navigation;
mod preferences;
mod projects;
mod reveal;
mod scroll;
mod splash;

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    config::SITE_CONFIG,
    content::{ContentError, SiteContent},
    tracker::{NavigationState, RevealRegistry},
};

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use navigation::Navigation;
use preferences::{provide_preferences, Preferences};
use projects::ProjectsSection;
use scroll::use_scroll_tracking;
use splash::SplashScreen;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_preferences();
    provide_context(RwSignal::new(NavigationState::default()));
    provide_context(StoredValue::new(Arc::new(Mutex::new(RevealRegistry::new(
        SITE_CONFIG.tracker.reveal_threshold,
    )))));

    let site_title = SITE_CONFIG.title.clone();

    view! {
        <Title formatter=move |title| format!("{site_title} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let (show_splash, set_show_splash) = signal(true);

    view! {
        <Title text="Portfolio" />
        <Show
            when=move || !show_splash.get()
            fallback=move || {
                view! { <SplashScreen on_complete=Callback::new(move |_| set_show_splash.set(false)) /> }
            }
        >
            <Portfolio />
        </Show>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    let content = match SiteContent::load() {
        Ok(c) => c,
        Err(e) => return view! { <ContentFailure error=e /> }.into_any(),
    };
    let prefs = expect_context::<Preferences>();
    let nav = expect_context::<RwSignal<NavigationState>>();
    use_scroll_tracking(nav, SITE_CONFIG.tracker);

    let profile = content.profile.clone();
    let language = prefs.language;
    let text = Signal::derive(move || content.text(language.get()));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 dark:from-gray-900 dark:to-slate-900 text-gray-900 dark:text-gray-100">
            <Navigation text />
            <HeroSection text profile=profile.clone() />
            <AboutSection text profile=profile.clone() language />
            <ExperienceSection text profile=profile.clone() language />
            <ProjectsSection text profile=profile.clone() language />
            <ContactSection text profile=profile.clone() />
            <Footer text profile />
        </div>
    }
    .into_any()
}

#[component]
fn ContentFailure(error: ContentError) -> impl IntoView {
    log::error!("couldn't load page content: {error}");
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    view! {
        <Title text="Error" />
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-xl p-6 rounded-lg border border-red-300 bg-red-50 text-red-800">
                <h1 class="text-xl font-bold mb-2">"Something went wrong"</h1>
                <pre class="whitespace-pre-wrap text-sm">{error.to_string()}</pre>
            </div>
        </div>
    }
}

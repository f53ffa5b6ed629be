use std::sync::Arc;

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    config::SITE_CONFIG,
    content::{Profile, Translations},
};

#[component]
pub fn HeroSection(text: Signal<Arc<Translations>>, profile: Arc<Profile>) -> impl IntoView {
    let personal = &profile.personal;
    let mailto = format!("mailto:{}", personal.email);
    let tel = format!("tel:{}", personal.phone);
    let github = personal.github.clone();
    let portfolio = personal.portfolio.clone();
    let cv_path = SITE_CONFIG.cv_path.clone();

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-4 pt-20">
            <div class="max-w-4xl mx-auto text-center">
                <Reveal class="mb-8">
                    <div class="w-32 h-32 mx-auto mb-6 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 p-1 float-animation">
                        <div class="w-full h-full rounded-full bg-white dark:bg-gray-900 flex items-center justify-center text-5xl font-bold text-blue-600">
                            {move || text.get().name.chars().next().map(String::from)}
                        </div>
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold mb-4">
                        <span class="gradient-text-animated">{move || text.get().name.clone()}</span>
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-600 dark:text-gray-300 mb-6">
                        {move || text.get().title.clone()}
                    </p>
                    <p class="text-lg text-gray-500 dark:text-gray-400 max-w-2xl mx-auto mb-8">
                        {move || text.get().subtitle.clone()}
                    </p>
                </Reveal>

                <Reveal class="flex flex-wrap justify-center gap-4 mb-8" delay_ms=100>
                    <a
                        href=mailto.clone()
                        class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 btn-enhanced"
                    >
                        {move || text.get().buttons.get_in_touch.clone()}
                    </a>
                    <a
                        href=cv_path
                        download=""
                        class="px-6 py-3 border-2 border-blue-600 text-blue-600 dark:text-blue-400 rounded-lg hover:bg-blue-600 hover:text-white btn-enhanced"
                    >
                        {move || text.get().buttons.download_cv.clone()}
                    </a>
                </Reveal>

                <Reveal class="flex justify-center space-x-6" delay_ms=200>
                    <SocialLink href=github label="GitHub" external=true />
                    <SocialLink href=mailto label="Email" external=false />
                    <SocialLink href=tel label="Phone" external=false />
                    <SocialLink href=portfolio label="Portfolio" external=true />
                </Reveal>

                <div class="mt-12 text-3xl text-gray-400 bouncing-arrow">"⌄"</div>
            </div>
        </section>
    }
}

#[component]
pub fn SocialLink(href: String, label: &'static str, external: bool) -> impl IntoView {
    let (target, rel) = if external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a
            href=href
            target=target
            rel=rel
            aria-label=label
            class="px-4 py-3 rounded-full bg-gray-100 dark:bg-gray-800 text-sm text-gray-600 dark:text-gray-300 hover:bg-blue-100 dark:hover:bg-blue-900/30 hover:text-blue-600 dark:hover:text-blue-400"
        >
            {label}
        </a>
    }
}

use std::sync::Arc;

use leptos::prelude::*;

use super::hero::SocialLink;
use crate::{
    config::build_year,
    content::{Profile, Translations},
};

#[component]
pub fn Footer(text: Signal<Arc<Translations>>, profile: Arc<Profile>) -> impl IntoView {
    let personal = &profile.personal;
    let github = personal.github.clone();
    let mailto = format!("mailto:{}", personal.email);
    let year = build_year();

    view! {
        <footer class="bg-gray-900 text-white py-12 px-4">
            <div class="max-w-6xl mx-auto text-center">
                <h3 class="text-2xl font-bold mb-4 gradient-text-animated">
                    {move || text.get().name.clone()}
                </h3>
                <p class="text-gray-400 mb-6">{move || text.get().footer.description.clone()}</p>
                <div class="flex justify-center space-x-6 mb-8">
                    <SocialLink href=github label="GitHub" external=true />
                    <SocialLink href=mailto label="Email" external=false />
                </div>
                <div class="border-t border-gray-800 pt-8">
                    <p class="text-gray-400">
                        {move || {
                            let text = text.get();
                            format!("© {year} {}. {}", text.name, text.footer.rights)
                        }}
                    </p>
                </div>
            </div>
        </footer>
    }
}

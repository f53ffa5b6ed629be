use std::sync::Arc;

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    content::{Profile, Translations},
    prefs::Language,
};

#[component]
pub fn AboutSection(
    text: Signal<Arc<Translations>>,
    profile: Arc<Profile>,
    language: Signal<Language>,
) -> impl IntoView {
    let education = profile.personal.education.clone();
    let location = profile.personal.location.clone();
    let skills = profile.personal.skills.clone();

    view! {
        <section id="about" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 section-title">
                        {move || text.get().about.title.clone()}
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        {move || text.get().about.subtitle.clone()}
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <Reveal class="card">
                            <h3 class="text-xl font-semibold mb-4">
                                {move || text.get().about.education.clone()}
                            </h3>
                            <h4 class="font-semibold text-lg">{education.university.clone()}</h4>
                            <p class="text-gray-600 dark:text-gray-300">
                                {
                                    let degree = education.degree.clone();
                                    move || degree.get(language.get()).clone()
                                }
                            </p>
                            <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">
                                {
                                    let graduated = education.graduation_date.clone();
                                    move || graduated.get(language.get()).clone()
                                }
                            </p>
                        </Reveal>
                        <Reveal class="card" delay_ms=100>
                            <h3 class="text-xl font-semibold mb-4">
                                {move || text.get().about.location.clone()}
                            </h3>
                            <p class="text-gray-600 dark:text-gray-300">
                                {move || location.get(language.get()).clone()}
                            </p>
                        </Reveal>
                    </div>

                    <div class="space-y-6">
                        <Reveal class="card">
                            <h3 class="text-xl font-semibold mb-4">
                                {move || text.get().skills.languages.clone()}
                            </h3>
                            <SkillTags skills=skills.languages.clone() color="blue" />
                        </Reveal>
                        <Reveal class="card space-y-3" delay_ms=100>
                            <h3 class="text-xl font-semibold mb-4">
                                {move || text.get().skills.frameworks.clone()}
                            </h3>
                            <h4 class="font-medium text-gray-700 dark:text-gray-300 mb-2">
                                {move || text.get().skills.frameworks_label.clone()}
                            </h4>
                            <SkillTags skills=skills.frameworks.clone() color="purple" />
                            <h4 class="font-medium text-gray-700 dark:text-gray-300 mb-2">
                                {move || text.get().skills.tools_label.clone()}
                            </h4>
                            <SkillTags skills=skills.tools.clone() color="green" />
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillTags(skills: Vec<String>, color: &'static str) -> impl IntoView {
    // spelled out in full so the tailwind scanner picks them up
    let tag_class = match color {
        "purple" => "bg-purple-100 dark:bg-purple-900/30 text-purple-800 dark:text-purple-300",
        "green" => "bg-green-100 dark:bg-green-900/30 text-green-800 dark:text-green-300",
        _ => "bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-300",
    };
    view! {
        <div class="flex flex-wrap gap-2">
            {skills
                .into_iter()
                .map(|skill| {
                    view! {
                        <span class=format!("px-3 py-1 rounded-full text-sm font-medium {tag_class}")>
                            {skill}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

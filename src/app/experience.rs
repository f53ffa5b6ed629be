use std::sync::Arc;

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    content::{Experience, Profile, Translations},
    prefs::Language,
};

#[component]
pub fn ExperienceSection(
    text: Signal<Arc<Translations>>,
    profile: Arc<Profile>,
    language: Signal<Language>,
) -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 section-title">
                        {move || text.get().experience.title.clone()}
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300">
                        {move || text.get().experience.subtitle.clone()}
                    </p>
                </Reveal>

                <div class="relative">
                    <div class="timeline-line"></div>
                    <div class="space-y-12">
                        {profile
                            .experience
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(i, exp)| view! { <TimelineItem exp index=i language /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(exp: Experience, index: usize, language: Signal<Language>) -> impl IntoView {
    // alternate sides of the timeline on wide screens
    let (row, pad) = if index % 2 == 0 {
        ("md:flex-row", "md:pr-8")
    } else {
        ("md:flex-row-reverse", "md:pl-8")
    };
    let Experience {
        company,
        position,
        period,
        location,
        description,
        achievements,
        tech_stack,
    } = exp;

    view! {
        <div class=format!("relative flex items-center {row}")>
            <div class="hidden md:block absolute left-1/2 -translate-x-1/2 w-4 h-4 bg-blue-600 rounded-full border-4 border-white dark:border-gray-800 z-10"></div>
            <Reveal class=format!("w-full md:w-5/12 {pad}")>
                <div class="card">
                    <h3 class="text-xl font-bold">{move || position.get(language.get()).clone()}</h3>
                    <p class="text-blue-600 dark:text-blue-400 font-semibold">{company}</p>
                    <p class="text-sm text-gray-500 dark:text-gray-400 my-2">{period}</p>
                    {location
                        .map(|location| {
                            view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                                    {move || location.get(language.get()).clone()}
                                </p>
                            }
                        })}
                    <p class="text-gray-600 dark:text-gray-300 mb-4">
                        {move || description.get(language.get()).clone()}
                    </p>
                    <ul class="space-y-2 mb-4 list-disc list-inside text-sm text-gray-600 dark:text-gray-300">
                        {move || {
                            achievements
                                .get(language.get())
                                .iter()
                                .map(|a| view! { <li>{a.clone()}</li> })
                                .collect_view()
                        }}
                    </ul>
                    <div class="flex flex-wrap gap-2">
                        {tech_stack
                            .into_iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-2 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-300 rounded text-xs font-medium">
                                        {tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        </div>
    }
}

use std::sync::Arc;

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    content::{Profile, Project, Translations},
    prefs::Language,
};

#[component]
pub fn ProjectsSection(
    text: Signal<Arc<Translations>>,
    profile: Arc<Profile>,
    language: Signal<Language>,
) -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 section-title">
                        {move || text.get().projects.title.clone()}
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300">
                        {move || text.get().projects.subtitle.clone()}
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {profile
                        .projects
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(i, project)| {
                            // stagger cards within a row
                            let delay_ms = (i % 3) as u32 * 100;
                            view! { <ProjectCard project text language delay_ms /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    text: Signal<Arc<Translations>>,
    language: Signal<Language>,
    delay_ms: u32,
) -> impl IntoView {
    let (shown_tech, hidden_tech) = project.tech_summary();
    let shown_tech = shown_tech.to_vec();
    let project = Arc::new(project);
    let demo = project.demo.clone();

    view! {
        <Reveal class="card-hover bg-white dark:bg-gray-800 rounded-xl shadow-lg overflow-hidden" delay_ms>
            <div class="h-48 bg-gradient-to-br from-blue-500 to-purple-600 relative overflow-hidden">
                <img src=project.image.clone() alt=project.title.clone() class="w-full h-full object-cover opacity-80" />
                <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent"></div>
                <h3 class="absolute bottom-4 inset-x-4 text-xl font-bold text-white">
                    {project.title.clone()}
                </h3>
            </div>
            <div class="p-6">
                <p class="text-gray-600 dark:text-gray-300 mb-4 text-sm leading-relaxed">
                    {
                        let project = project.clone();
                        move || project.description.get(language.get()).clone()
                    }
                </p>
                <h4 class="font-semibold mb-2 text-sm">
                    {move || text.get().projects.key_features.clone()}
                </h4>
                <ul class="space-y-1 mb-4 list-disc list-inside text-xs text-gray-600 dark:text-gray-300">
                    {
                        let project = project.clone();
                        move || {
                            project
                                .highlights(language.get())
                                .iter()
                                .map(|f| view! { <li>{f.clone()}</li> })
                                .collect_view()
                        }
                    }
                </ul>
                <div class="flex flex-wrap gap-1 mb-4">
                    {shown_tech
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded text-xs">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden_tech > 0)
                        .then(|| {
                            view! {
                                <span class="px-2 py-1 bg-gray-100 dark:bg-gray-700 text-gray-500 dark:text-gray-400 rounded text-xs">
                                    {move || format!("+{hidden_tech} {}", text.get().projects.more)}
                                </span>
                            }
                        })}
                </div>
                <div class="flex space-x-3">
                    <a
                        href=project.github.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-3 py-2 bg-gray-100 dark:bg-gray-700 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-600 text-sm"
                    >
                        {move || text.get().projects.buttons.code.clone()}
                    </a>
                    {demo
                        .map(|demo| {
                            view! {
                                <a
                                    href=demo
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 text-sm"
                                >
                                    {move || text.get().projects.buttons.demo.clone()}
                                </a>
                            }
                        })}
                </div>
            </div>
        </Reveal>
    }
}

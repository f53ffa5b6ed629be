use std::sync::Arc;

use leptos::{html, prelude::*};

use super::reveal::Reveal;
use crate::{
    contact::{ContactError, ContactForm},
    content::{Profile, Translations},
};

#[component]
pub fn ContactSection(text: Signal<Arc<Translations>>, profile: Arc<Profile>) -> impl IntoView {
    let personal = profile.personal.clone();
    let recipient = personal.email.clone();

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (errors, set_errors) = signal(Vec::<ContactError>::new());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let form = ContactForm {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        };
        match form.validate() {
            Ok(()) => {
                set_errors.set(Vec::new());
                let href = form.mailto_href(&recipient);
                if let Err(e) = window().location().set_href(&href) {
                    log::warn!("couldn't open mail client: {e:?}");
                    return;
                }
                set_sent.set(true);
            }
            Err(found) => {
                set_sent.set(false);
                set_errors.set(found);
            }
        }
    };

    let has_error = move |e: ContactError| errors.with(|errs| errs.contains(&e));
    let error_line = move |e: ContactError| {
        move || {
            has_error(e).then(|| {
                view! {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                        {e.message(&text.get().contact.form).to_string()}
                    </p>
                }
            })
        }
    };
    let input_class = "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent bg-white dark:bg-gray-700 text-gray-900 dark:text-white";

    view! {
        <section id="contact" class="py-20 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-4xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 section-title">
                        {move || text.get().contact.title.clone()}
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300">
                        {move || text.get().contact.subtitle.clone()}
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-12">
                    <Reveal class="space-y-4">
                        <h3 class="text-2xl font-bold mb-6">{move || text.get().contact.info.clone()}</h3>
                        <ContactRow
                            label=Signal::stored("Email".to_string())
                            href=format!("mailto:{}", personal.email)
                            value=personal.email.clone()
                        />
                        <ContactRow
                            label=Signal::derive(move || text.get().contact.phone.clone())
                            href=format!("tel:{}", personal.phone)
                            value=personal.phone.clone()
                        />
                        <ContactRow
                            label=Signal::stored("GitHub".to_string())
                            href=personal.github.clone()
                            value=personal.github.trim_start_matches("https://").to_string()
                        />
                        <ContactRow
                            label=Signal::derive(move || text.get().contact.portfolio.clone())
                            href=personal.portfolio.clone()
                            value=personal.portfolio.trim_start_matches("https://").to_string()
                        />
                    </Reveal>

                    <Reveal delay_ms=100>
                        <h3 class="text-2xl font-bold mb-6">
                            {move || text.get().contact.form.title.clone()}
                        </h3>
                        <form class="space-y-6" novalidate=true on:submit=on_submit>
                            <div>
                                <label for="name" class="block text-sm font-medium mb-2">
                                    {move || text.get().contact.form.name.clone()}
                                </label>
                                <input
                                    node_ref=name_ref
                                    type="text"
                                    id="name"
                                    name="name"
                                    class=input_class
                                    placeholder=move || text.get().contact.form.placeholders.name.clone()
                                />
                                {error_line(ContactError::EmptyName)}
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium mb-2">
                                    {move || text.get().contact.form.email.clone()}
                                </label>
                                <input
                                    node_ref=email_ref
                                    type="email"
                                    id="email"
                                    name="email"
                                    class=input_class
                                    placeholder=move || text.get().contact.form.placeholders.email.clone()
                                />
                                {error_line(ContactError::InvalidEmail)}
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium mb-2">
                                    {move || text.get().contact.form.message.clone()}
                                </label>
                                <textarea
                                    node_ref=message_ref
                                    id="message"
                                    name="message"
                                    rows="5"
                                    class=format!("{input_class} resize-none")
                                    placeholder=move || text.get().contact.form.placeholders.message.clone()
                                ></textarea>
                                {error_line(ContactError::MessageTooShort)}
                            </div>
                            <button
                                type="submit"
                                class="w-full bg-gradient-to-r from-blue-600 to-purple-600 text-white py-3 px-6 rounded-lg font-semibold hover:from-blue-700 hover:to-purple-700 transition-all duration-300 shadow-lg"
                            >
                                {move || text.get().contact.form.send.clone()}
                            </button>
                            {move || {
                                sent.get()
                                    .then(|| {
                                        view! {
                                            <p class="text-sm text-green-700 dark:text-green-400">
                                                {text.get().contact.form.sent.clone()}
                                            </p>
                                        }
                                    })
                            }}
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(label: Signal<String>, href: String, value: String) -> impl IntoView {
    let external = href.starts_with("http");
    view! {
        <div class="flex items-center space-x-4 p-4 bg-gray-50 dark:bg-gray-700 rounded-lg">
            <div>
                <p class="font-semibold">{move || label.get()}</p>
                <a
                    href=href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class="text-blue-600 dark:text-blue-400 hover:underline"
                >
                    {value}
                </a>
            </div>
        </div>
    }
}

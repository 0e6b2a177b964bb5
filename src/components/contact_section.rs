//! Contact Section
//!
//! Contact details plus the message form. The form state lives in a local
//! signal; the relay call and its timers run on `spawn_local`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::components::SectionHeading;
use crate::contact::{deliver, expire_after, ContactForm, Field, FormCell, SubmissionStatus};
use crate::context::use_relay_context;
use crate::data::{CONTACT_EMAIL, CONTACT_INFO};
use crate::models::ContactEntry;
use crate::relay::EmailRelay;

impl FormCell for RwSignal<ContactForm> {
    fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        self.try_update(f)
    }
}

#[component]
fn ContactInfoRow(entry: ContactEntry) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="w-12 h-12 flex items-center justify-center rounded-full bg-blue-100 dark:bg-blue-900 text-blue-600 dark:text-blue-300 font-semibold">
                {entry.label.chars().next().map(String::from).unwrap_or_default()}
            </div>
            <div>
                <h4 class="font-semibold">{entry.label}</h4>
                {match entry.link() {
                    Some(link) => view! {
                        <a
                            href=link.href
                            target=link.target()
                            rel="noopener noreferrer"
                            class="text-blue-600 dark:text-blue-400 hover:underline"
                        >
                            {link.label}
                        </a>
                    }.into_any(),
                    None => view! {
                        <p class="text-gray-600 dark:text-gray-300">{entry.value}</p>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Labelled input bound to one form field
#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || form.with(|f| f.error(field));
    let on_input = move |ev: web_sys::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let input_class = move || if error().is_some() {
        "w-full px-4 py-3 rounded-lg border border-red-500 bg-white dark:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-red-400"
    } else {
        "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
    };

    let input_type = if field == Field::Email { "email" } else { "text" };

    let control = if field == Field::Message {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                class=input_class
                prop:value=value
                on:input=on_input
            ></textarea>
        }.into_any()
    } else {
        view! {
            <input
                id=field.id()
                name=field.id()
                type=input_type
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }.into_any()
    };

    view! {
        <div>
            <label for=field.id() class="block mb-2 font-medium">{field.label()}</label>
            {control}
            {move || error().map(|e| view! {
                <p class="mt-1 text-sm text-red-500">{format!("{} {}", field.label(), e)}</p>
            })}
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let relay_ctx = use_relay_context();
    let form = RwSignal::new(ContactForm::new());
    let status = Memo::new(move |_| form.with(|f| f.status()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(dispatch) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let config = relay_ctx.config;
        let ticket = dispatch.ticket;

        spawn_local(async move {
            expire_after(&form, ticket, config.timeout_ms, TimeoutFuture::new).await;
        });

        spawn_local(async move {
            deliver(&form, &EmailRelay::new(config), dispatch, TimeoutFuture::new).await;
        });
    };

    let form_view = move || view! {
        <form class="space-y-6" on:submit=on_submit novalidate=true>
            <Show when=move || status.get() == SubmissionStatus::Error>
                <div class="p-4 rounded-lg bg-red-50 dark:bg-red-900/30 border border-red-300 dark:border-red-700 text-red-700 dark:text-red-300">
                    <p class="font-semibold">"Message not sent"</p>
                    <p class="text-sm">
                        "Something went wrong. Please try again, or email me directly at "
                        <a href=format!("mailto:{}", CONTACT_EMAIL) class="underline">{CONTACT_EMAIL}</a>
                        "."
                    </p>
                </div>
            </Show>

            {Field::ALL.into_iter().map(|field| view! { <FormField form=form field=field /> }).collect_view()}

            <button
                type="submit"
                class="w-full py-3 bg-blue-600 text-white font-semibold rounded-lg shadow hover:bg-blue-700 disabled:opacity-60 disabled:cursor-not-allowed transition"
                disabled=move || status.get() == SubmissionStatus::Sending
            >
                {move || if status.get() == SubmissionStatus::Sending { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    };

    view! {
        <section class="py-20 px-4 bg-white dark:bg-gray-900">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Get In Touch" subtitle="Have a project in mind or just want to say hello? My inbox is open." />

                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        {CONTACT_INFO.iter().map(|entry| view! { <ContactInfoRow entry=*entry /> }).collect_view()}
                    </div>

                    <div class="p-8 rounded-2xl bg-gray-50 dark:bg-gray-800 shadow-lg">
                        <Show when=move || status.get() == SubmissionStatus::Success fallback=form_view>
                            <div class="text-center py-12">
                                <div class="text-5xl text-green-500 mb-4">"✓"</div>
                                <h3 class="text-2xl font-bold mb-2">"Message Sent!"</h3>
                                <p class="text-gray-600 dark:text-gray-300">
                                    "Thanks for reaching out. I'll get back to you soon."
                                </p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

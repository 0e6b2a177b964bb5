//! Experience Section
//!
//! Work history cards; long responsibility lists collapse to the first two.

use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::data::{EXPERIENCES, RESUME_PATH};
use crate::models::Experience;

#[component]
fn ExperienceCard(experience: Experience) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <div class="p-8 rounded-2xl bg-white dark:bg-gray-800 shadow-lg hover:shadow-xl transition">
            <div class="flex flex-wrap items-start justify-between gap-4 mb-4">
                <div class="flex items-center gap-4">
                    {experience.logo.map(|logo| view! {
                        <img src=logo alt=experience.company class="w-14 h-14 rounded-lg object-contain bg-white p-1" />
                    })}
                    <div>
                        <h3 class="text-xl font-bold">{experience.role}</h3>
                        <a
                            href=experience.company_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue-600 dark:text-blue-400 hover:underline"
                        >
                            {experience.company}
                        </a>
                    </div>
                </div>
                <div class="text-right text-sm text-gray-500 dark:text-gray-400">
                    <div>{experience.period}</div>
                    <div>{experience.location}</div>
                    <span class="inline-block mt-1 px-2 py-0.5 rounded bg-blue-100 dark:bg-blue-900 text-blue-700 dark:text-blue-300">
                        {experience.employment}
                    </span>
                </div>
            </div>

            <ul class="space-y-2 mb-4 text-gray-600 dark:text-gray-300">
                {move || experience.visible_responsibilities(expanded.get())
                    .iter()
                    .map(|item| view! { <li class="flex gap-2"><span class="text-blue-500">"▹"</span>{*item}</li> })
                    .collect_view()}
            </ul>

            <Show when=move || experience.is_expandable()>
                <button
                    class="mb-4 text-sm font-medium text-blue-600 dark:text-blue-400 hover:underline"
                    on:click=move |_| set_expanded.update(|v| *v = !*v)
                >
                    {move || if expanded.get() { "Show Less" } else { "Show More" }}
                </button>
            </Show>

            <div class="flex flex-wrap gap-2">
                {experience.skills.iter().map(|skill| view! {
                    <span class="px-3 py-1 text-xs rounded-full bg-gray-100 dark:bg-gray-700">{*skill}</span>
                }).collect_view()}
            </div>

            {experience.certificate_url.map(|href| view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block mt-4 text-sm text-blue-600 dark:text-blue-400 hover:underline"
                >
                    "View Certificate"
                </a>
            })}
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section class="py-20 px-4 bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-5xl mx-auto">
                <SectionHeading title="Experience" subtitle="Where I've worked and what I've built along the way" />

                <div class="space-y-8">
                    {EXPERIENCES.iter().map(|experience| view! {
                        <ExperienceCard experience=*experience />
                    }).collect_view()}
                </div>

                <div class="text-center mt-12">
                    <a
                        href=RESUME_PATH
                        download=""
                        class="inline-block px-6 py-3 bg-blue-600 text-white rounded-lg shadow hover:bg-blue-700 transition"
                    >
                        "Download Full Resume"
                    </a>
                </div>
            </div>
        </section>
    }
}

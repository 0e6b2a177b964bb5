//! About Section

use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::data::{ABOUT_SUMMARY, BIO, RESUME_PATH, SKILL_SUMMARIES, TIMELINE};
use crate::models::{SkillSummary, TimelineEntry};

#[component]
fn SummaryCard(summary: SkillSummary) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl bg-white dark:bg-gray-800 shadow">
            <h4 class="text-lg font-semibold text-blue-600 dark:text-blue-400 mb-3">{summary.heading}</h4>
            <ul class="space-y-1 text-sm text-gray-600 dark:text-gray-300">
                {summary.items.iter().map(|item| view! { <li>"• " {*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry) -> impl IntoView {
    view! {
        <div class="relative pl-8 pb-8 border-l-2 border-blue-500 last:pb-0">
            <span class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-blue-500"></span>
            <span class="text-sm font-medium text-blue-600 dark:text-blue-400">{entry.years}</span>
            <h4 class="text-lg font-semibold mt-1">{entry.title}</h4>
            <p class="text-sm text-gray-500 dark:text-gray-400">{entry.organization}</p>
            <p class="mt-2 text-gray-600 dark:text-gray-300">{entry.description}</p>
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="py-20 px-4 bg-white dark:bg-gray-900">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="About Me" subtitle=ABOUT_SUMMARY />

                <div class="grid md:grid-cols-2 gap-12">
                    <div>
                        {BIO.iter().map(|paragraph| view! {
                            <p class="mb-4 text-gray-600 dark:text-gray-300 leading-relaxed">{*paragraph}</p>
                        }).collect_view()}

                        <div class="grid sm:grid-cols-2 gap-4 mt-8">
                            {SKILL_SUMMARIES.iter().map(|summary| view! {
                                <SummaryCard summary=*summary />
                            }).collect_view()}
                        </div>

                        <a
                            href=RESUME_PATH
                            download=""
                            class="inline-block mt-8 px-6 py-3 bg-blue-600 text-white rounded-lg shadow hover:bg-blue-700 transition"
                        >
                            "Download Resume"
                        </a>
                    </div>

                    <div>
                        <h3 class="text-2xl font-bold mb-6">"My Journey"</h3>
                        {TIMELINE.iter().map(|entry| view! {
                            <TimelineItem entry=*entry />
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

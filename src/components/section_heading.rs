//! Section Heading Component
//!
//! Gradient title with a short lead paragraph, shared by every section.

use leptos::prelude::*;

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-4xl font-bold mb-4">
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-blue-400">
                    {title}
                </span>
            </h2>
            {subtitle.map(|text| view! {
                <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">{text}</p>
            })}
        </div>
    }
}

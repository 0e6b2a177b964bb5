//! Projects Section

use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::data::{GITHUB_PROFILE, PROJECTS};
use crate::models::Project;

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let (show_details, set_show_details) = signal(false);

    view! {
        <div class="group flex flex-col rounded-2xl overflow-hidden bg-white dark:bg-gray-800 shadow-lg hover:shadow-xl transition">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover group-hover:scale-110 transition duration-500"
                />
                <div class="absolute inset-0 flex items-center justify-center gap-4 bg-black/60 opacity-0 group-hover:opacity-100 transition">
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 bg-white text-gray-900 rounded-lg text-sm font-medium"
                    >
                        "Live Demo"
                    </a>
                    <a
                        href=project.source_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 bg-gray-900 text-white rounded-lg text-sm font-medium"
                    >
                        "Source"
                    </a>
                </div>
            </div>

            <div class="flex flex-col flex-1 p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {project.tags.iter().map(|tag| view! {
                        <span class="px-3 py-1 text-xs rounded-full bg-blue-100 dark:bg-blue-900 text-blue-700 dark:text-blue-300">
                            {*tag}
                        </span>
                    }).collect_view()}
                </div>

                <Show when=move || show_details.get()>
                    <ul class="mb-4 space-y-1 text-sm text-gray-600 dark:text-gray-300">
                        {project.features.iter().map(|feature| view! { <li>"✓ " {*feature}</li> }).collect_view()}
                    </ul>
                </Show>

                <button
                    class="mt-auto text-sm font-medium text-blue-600 dark:text-blue-400 hover:underline self-start"
                    on:click=move |_| set_show_details.update(|v| *v = !*v)
                >
                    {move || if show_details.get() { "Hide Details" } else { "View Features" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section class="py-20 px-4 bg-white dark:bg-gray-900">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Projects" subtitle="A selection of things I've designed and built" />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || PROJECTS.iter().copied()
                        key=|project| project.id
                        children=move |project| view! { <ProjectCard project=project /> }
                    />
                </div>

                <div class="text-center mt-12">
                    <a
                        href=GITHUB_PROFILE
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-block px-6 py-3 border-2 border-blue-600 text-blue-600 dark:text-blue-400 rounded-lg hover:bg-blue-600 hover:text-white transition"
                    >
                        "View More on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

//! Home Section
//!
//! Hero with profile, tagline, social links and calls to action.

use leptos::prelude::*;

use crate::components::ParticleField;
use crate::data::{EMAIL_LINK, GITHUB_LINK, LINKEDIN_LINK, OWNER_NAME, PROFILE_IMAGE, RESUME_PATH, TAGLINE};
use crate::models::{Link, SectionId};
use crate::store::{store_navigate, use_shell_store};

/// Round icon-style link in the hero
#[component]
fn SocialLink(link: Link) -> impl IntoView {
    view! {
        <a
            href=link.href
            target=link.target()
            rel="noopener noreferrer"
            title=link.label
            class="px-4 py-2 rounded-full bg-white/80 dark:bg-gray-800/80 text-blue-600 dark:text-blue-400 shadow hover:scale-110 hover:text-blue-700 transition"
        >
            {link.label}
        </a>
    }
}

#[component]
pub fn HomeSection() -> impl IntoView {
    let store = use_shell_store();

    view! {
        <section class="relative min-h-screen flex items-center justify-center px-4 bg-gradient-to-b from-blue-50 to-white dark:from-gray-900 dark:to-gray-800">
            <ParticleField />

            <div class="relative z-10 text-center max-w-3xl">
                <img
                    src=PROFILE_IMAGE
                    alt=OWNER_NAME
                    class="w-40 h-40 mx-auto mb-8 rounded-full object-cover border-4 border-blue-500 shadow-xl"
                />

                <h1 class="text-5xl md:text-6xl font-bold mb-4">
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-blue-400">
                        {OWNER_NAME}
                    </span>
                </h1>

                <p class="text-xl md:text-2xl text-gray-600 dark:text-gray-300 mb-8">{TAGLINE}</p>

                <div class="flex flex-wrap justify-center gap-4 mb-10">
                    <SocialLink link=EMAIL_LINK />
                    <SocialLink link=LINKEDIN_LINK />
                    <SocialLink link=GITHUB_LINK />
                    <a
                        href=RESUME_PATH
                        download=""
                        title="Resume"
                        class="px-4 py-2 rounded-full bg-white/80 dark:bg-gray-800/80 text-blue-600 dark:text-blue-400 shadow hover:scale-110 transition"
                    >
                        "Resume"
                    </a>
                </div>

                <div class="flex flex-wrap justify-center gap-4">
                    <button
                        class="px-8 py-3 bg-blue-600 text-white font-semibold rounded-lg shadow-lg hover:bg-blue-700 transition"
                        on:click=move |_| store_navigate(&store, SectionId::Projects)
                    >
                        "View My Work"
                    </button>
                    <button
                        class="px-8 py-3 border-2 border-blue-600 text-blue-600 dark:text-blue-400 font-semibold rounded-lg hover:bg-blue-600 hover:text-white transition"
                        on:click=move |_| store_navigate(&store, SectionId::Contact)
                    >
                        "Contact Me"
                    </button>
                </div>
            </div>
        </section>
    }
}

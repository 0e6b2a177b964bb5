//! Skills Section
//!
//! Category tabs over the skill groups, with level bars and star ratings.

use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::data::SKILL_GROUPS;
use crate::models::{filter_skill_groups, SectionId, Skill, SkillFilter, SkillGroup, Star};
use crate::store::{store_navigate, use_shell_store};

/// Glyph and extra classes for one star
fn star_glyph(star: Star) -> (&'static str, &'static str) {
    match star {
        Star::Full => ("★", ""),
        Star::Half => ("⯪", "opacity-60"),
        Star::Empty => ("☆", "text-gray-300 dark:text-gray-600"),
    }
}

#[component]
fn StarRating(skill: Skill) -> impl IntoView {
    view! {
        <span class="text-yellow-400 text-sm" title=format!("{}%", skill.level)>
            {skill.stars().into_iter().map(|star| {
                let (glyph, class) = star_glyph(star);
                view! { <span class=class>{glyph}</span> }
            }).collect_view()}
        </span>
    }
}

#[component]
fn SkillGroupCard(group: SkillGroup) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-white dark:bg-gray-800 shadow-lg">
            <h3 class="text-xl font-bold mb-6 text-blue-600 dark:text-blue-400">{group.title}</h3>
            <div class="space-y-4">
                {group.skills.iter().map(|skill| view! {
                    <div>
                        <div class="flex justify-between items-center mb-1">
                            <span class="font-medium">{skill.name}</span>
                            <StarRating skill=*skill />
                        </div>
                        <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                            <div
                                class="h-full rounded-full bg-gradient-to-r from-blue-600 to-blue-400"
                                style=format!("width: {}%;", skill.level)
                            ></div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let store = use_shell_store();
    let (filter, set_filter) = signal(SkillFilter::default());

    view! {
        <section class="py-20 px-4 bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Skills" subtitle="Technologies and tools I work with" />

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {SkillFilter::ALL.into_iter().map(|tab| {
                        let is_selected = move || filter.get() == tab;
                        view! {
                            <button
                                class=move || if is_selected() {
                                    "px-5 py-2 rounded-full font-medium bg-blue-600 text-white shadow"
                                } else {
                                    "px-5 py-2 rounded-full font-medium bg-white dark:bg-gray-800 hover:bg-blue-50 dark:hover:bg-gray-700"
                                }
                                on:click=move |_| set_filter.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {move || filter_skill_groups(SKILL_GROUPS, filter.get())
                        .into_iter()
                        .map(|group| view! { <SkillGroupCard group=group /> })
                        .collect_view()}
                </div>

                <div class="text-center mt-12">
                    <button
                        class="px-8 py-3 bg-blue-600 text-white font-semibold rounded-lg shadow-lg hover:bg-blue-700 transition"
                        on:click=move |_| store_navigate(&store, SectionId::Contact)
                    >
                        "Let's Discuss a Project"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_glyphs_follow_rating() {
        let skill = Skill { name: "Rust", level: 75 };
        let glyphs: Vec<&str> = skill.stars().into_iter().map(|s| star_glyph(s).0).collect();
        assert_eq!(glyphs, vec!["★", "★", "★", "⯪", "☆"]);
    }

    #[test]
    fn test_only_full_stars_keep_base_color() {
        assert_eq!(star_glyph(Star::Full).1, "");
        assert!(!star_glyph(Star::Half).1.is_empty());
        assert!(!star_glyph(Star::Empty).1.is_empty());
    }
}

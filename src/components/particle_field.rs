//! Particle Field Component
//!
//! Drifting dots behind the hero section.

use std::time::Duration;

use leptos::prelude::*;

use crate::particles::{self, PARTICLE_COUNT, TICK_MS};

#[component]
pub fn ParticleField() -> impl IntoView {
    let (dots, set_dots) = signal(particles::spawn(PARTICLE_COUNT, js_sys::Math::random));

    match set_interval_with_handle(
        move || set_dots.update(|dots| dots.iter_mut().for_each(|dot| dot.drift())),
        Duration::from_millis(TICK_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => log::warn!("[particles] could not start animation timer"),
    }

    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none">
            {move || dots.get().into_iter().map(|dot| view! {
                <div class="absolute rounded-full bg-blue-500 opacity-20" style=dot.style()></div>
            }).collect_view()}
        </div>
    }
}

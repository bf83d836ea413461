//! Landing banner: name, role, traits, and social links.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::state::ui::Section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section hero">
            <p class="hero__greeting">"Hello, I'm"</p>
            <h1 class="hero__name">{PROFILE.name}</h1>
            <h2 class="hero__role">{PROFILE.role}</h2>
            <ul class="hero__traits">
                {PROFILE.traits.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
            </ul>
            <p class="hero__tagline">{PROFILE.tagline}</p>
            <ul class="hero__skills">
                {PROFILE
                    .headline_skills
                    .iter()
                    .map(|s| view! { <li class="chip">{*s}</li> })
                    .collect_view()}
            </ul>
            <div class="hero__actions">
                <a class="button button--primary" href="#contact">"Get in touch"</a>
                <a class="button" href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
            </div>
            <div class="hero__social">
                {PROFILE
                    .social
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href target="_blank" rel="noopener noreferrer" class="hero__social-link">
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

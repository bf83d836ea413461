//! Achievement cards and the resume download block.

use leptos::prelude::*;

use crate::content::{ACHIEVEMENTS, PROFILE};
use crate::state::ui::Section;

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id=Section::Achievements.id() class="section achievements">
            <h2 class="section__title">"Achievements"</h2>
            <div class="achievements__grid">
                {ACHIEVEMENTS
                    .iter()
                    .map(|a| {
                        view! {
                            <article class="card achievement-card">
                                <img src=a.image alt=a.title loading="lazy"/>
                                <h3>{a.title}</h3>
                                <p>{a.description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="card resume">
                <img class="resume__preview" src=PROFILE.resume_preview alt="Resume preview" loading="lazy"/>
                <div class="resume__actions">
                    <h3>"Resume"</h3>
                    <a class="button" href=PROFILE.resume_href target="_blank" rel="noopener noreferrer">"View"</a>
                    <a class="button button--primary" href=PROFILE.resume_href download="">"Download"</a>
                </div>
            </div>
        </section>
    }
}

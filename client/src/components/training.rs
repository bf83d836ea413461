//! Training block: highlights plus tools grouped by category.

use leptos::prelude::*;

use crate::content::{TRAINING, Training};

#[component]
pub fn TrainingSection() -> impl IntoView {
    view! {
        <section id="training" class="section training">
            <h2 class="section__title">"Training"</h2>
            {TRAINING.iter().map(|t| view! { <TrainingCard training=*t/> }).collect_view()}
        </section>
    }
}

#[component]
fn TrainingCard(training: Training) -> impl IntoView {
    view! {
        <article class="card training__card">
            <header class="training__header">
                <h3>{training.title}</h3>
                <span class="training__org">{training.organization}</span>
                <span class="training__meta">{training.duration}" · "{training.location}</span>
            </header>
            <ul class="training__highlights">
                {training.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>
            <div class="training__tools">
                {training
                    .categories()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div class="training__tool-group">
                                <h4>{category}</h4>
                                <ul>
                                    {training
                                        .tools_in(category)
                                        .into_iter()
                                        .map(|name| view! { <li class="chip">{name}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

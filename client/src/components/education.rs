//! Education timeline; entries alternate sides.

use leptos::prelude::*;

use crate::content::{EDUCATION, Education, TimelineSide};
use crate::state::ui::Section;

#[component]
pub fn EducationTimeline() -> impl IntoView {
    view! {
        <section id=Section::Education.id() class="section education">
            <h2 class="section__title">"Education"</h2>
            <ol class="timeline">
                {EDUCATION
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! { <TimelineEntry entry=*entry side=TimelineSide::for_index(index)/> }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: Education, side: TimelineSide) -> impl IntoView {
    view! {
        <li class=side.class()>
            <span class="timeline-entry__dot"></span>
            <div class="card timeline-entry__card">
                <img class="timeline-entry__image" src=entry.image alt=entry.institution loading="lazy"/>
                <h3>
                    <a href=entry.website target="_blank" rel="noopener noreferrer">{entry.institution}</a>
                </h3>
                <p class="timeline-entry__degree">{entry.degree}</p>
                <p class="timeline-entry__meta">{entry.location}" · "{entry.duration}</p>
                <ul>{entry.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}</ul>
            </div>
        </li>
    }
}

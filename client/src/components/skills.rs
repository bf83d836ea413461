//! Skill categories grid.

use leptos::prelude::*;

use crate::content::SKILL_CATEGORIES;
use crate::state::ui::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="section skills">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills__grid">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="card skills__category">
                                <h3>{category.title}</h3>
                                <ul class="skills__list">
                                    {category.skills.iter().map(|s| view! { <li class="chip">{*s}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

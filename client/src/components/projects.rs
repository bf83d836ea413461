//! Project cards with repository and live links.

use leptos::prelude::*;

use crate::content::{PROJECTS, Project};
use crate::state::ui::Section;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="section projects">
            <h2 class="section__title">"Projects"</h2>
            <div class="projects__grid">
                {PROJECTS.iter().map(|p| view! { <ProjectCard project=*p/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <img class="project-card__image" src=project.image alt=project.title loading="lazy"/>
            <div class="project-card__body">
                <h3>{project.title}</h3>
                <span class="project-card__date">{project.date}</span>
                <p>{project.description}</p>
                <ul class="project-card__tech">
                    {project.technologies.iter().map(|t| view! { <li class="chip">{*t}</li> }).collect_view()}
                </ul>
                <div class="project-card__links">
                    <a href=project.repository target="_blank" rel="noopener noreferrer">"Code"</a>
                    <a href=project.live target="_blank" rel="noopener noreferrer">"Live Demo"</a>
                </div>
            </div>
        </article>
    }
}

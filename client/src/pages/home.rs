//! The portfolio page: every section in reading order.

use leptos::prelude::*;

use crate::components::achievements::Achievements;
use crate::components::certificates::Certificates;
use crate::components::contact::Contact;
use crate::components::education::EducationTimeline;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::training::TrainingSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <ThemeToggle/>
            <main class="page__sections">
                <Hero/>
                <Skills/>
                <TrainingSection/>
                <Projects/>
                <EducationTimeline/>
                <Certificates/>
                <Achievements/>
                <Contact/>
            </main>
        </div>
    }
}

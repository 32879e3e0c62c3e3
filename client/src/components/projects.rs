//! Project gallery region.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::region::Region;
use crate::content::{PROJECT_IMAGE_HEIGHT, PROJECT_IMAGE_WIDTH, PROJECTS, Project};
use crate::state::sections::SectionId;

#[component]
pub fn ProjectSection() -> impl IntoView {
    view! {
        <Region id=SectionId::Project class="projects">
            <div class="region__heading">
                <h2>"Recent Projects"</h2>
            </div>
            <div class="projects__grid">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </Region>
    }
}

/// A linked card for one project. The whole card is the hyperlink.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <a class="project-card" href=project.link>
            <img
                class="project-card__image"
                src=project.image
                alt=project.title
                width=PROJECT_IMAGE_WIDTH.to_string()
                height=PROJECT_IMAGE_HEIGHT.to_string()
                loading="lazy"
            />
            <div class="project-card__body">
                <span class="project-card__date mono muted">{project.date}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description muted">{project.description}</p>
                <ul class="project-card__tech">
                    {project.tech.iter().map(|tech| view! { <li class="tag tag--outlined">{*tech}</li> }).collect_view()}
                </ul>
                <span class="project-card__cta muted">
                    "View Project"
                    <IconGlyph icon=Icon::ArrowRight class="project-card__arrow"/>
                </span>
            </div>
        </a>
    }
}

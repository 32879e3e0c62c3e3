#![cfg(feature = "ssr")]

use leptos::tachys::view::RenderHtml;

use super::*;

fn render_card(project: &'static Project) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <ProjectCard project=project/> }.to_html())
}

#[test]
fn code_showcase_card_links_to_exact_url() {
    let html = render_card(&PROJECTS[0]);
    assert!(html.contains(r#"href="https://github.com/pemrogrammer/code-showcase-studio""#));
}

#[test]
fn card_renders_preview_image_with_target_size() {
    let project = &PROJECTS[1];
    let html = render_card(project);
    assert!(html.contains(&format!(r#"src="{}""#, project.image)));
    assert!(html.contains(r#"width="400""#));
    assert!(html.contains(r#"height="200""#));
}

#[test]
fn card_renders_every_tech_label() {
    let project = &PROJECTS[2];
    let html = render_card(project);
    for tech in project.tech {
        assert!(html.contains(&format!(">{tech}<")), "missing tech label {tech}");
    }
}

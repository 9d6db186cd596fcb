//! Project card component.

use web_types::Project;
use yew::prelude::*;

/// Properties for ProjectCard component.
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    /// Emits the project id on each vote click.
    pub on_vote: Callback<String>,
    /// False once today's soft cap is spent.
    pub can_vote: bool,
}

/// Project card with summary, tech tags, and a vote button.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let onclick = {
        let on_vote = props.on_vote.clone();
        let id = project.id.clone();
        Callback::from(move |_| on_vote.emit(id.clone()))
    };

    html! {
        <div class="card project-card">
            <div class="project-info">
                <div class="project-title">{ &project.title }</div>
                <div class="project-summary">{ &project.summary }</div>
                <div class="project-tech">
                    { for project.tech.iter().map(|t| html! {
                        <span class="tech-tag">{ t }</span>
                    })}
                </div>
            </div>
            <button
                class="vote-button"
                disabled={!props.can_vote}
                {onclick}
            >
                {"▲ "}{ project.votes }
            </button>
        </div>
    }
}

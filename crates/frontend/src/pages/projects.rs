//! Projects page: the full voteable list.

use yew::prelude::*;

use crate::components::ProjectCard;
use crate::hooks::use_projects;

/// Projects page component.
#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let handle = use_projects();

    html! {
        <div>
            <h1>{"Projects"}</h1>
            <p class="text-secondary">
                { format!("{} votes left today", handle.votes_remaining_today) }
            </p>

            if handle.loading {
                <p class="text-secondary">{"Loading projects..."}</p>
            } else if handle.projects.is_empty() {
                <div class="card">
                    <p>{"No projects found."}</p>
                </div>
            } else {
                <div class="project-list">
                    { for handle.projects.iter().map(|project| {
                        html! {
                            <ProjectCard
                                project={project.clone()}
                                on_vote={handle.vote.clone()}
                                can_vote={handle.votes_remaining_today > 0}
                            />
                        }
                    })}
                </div>
            }
        </div>
    }
}

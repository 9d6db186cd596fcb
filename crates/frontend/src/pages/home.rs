//! Home page: the landing sections that feed the loading coordinator.
//!
//! Each section registers with the loading context on mount. Static
//! sections use staggered artificial delays; the projects preview reports
//! ready once its data fetch resolves.

use load_progress::Section;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::ProjectCard;
use crate::hooks::{use_projects, use_section_ready};
use crate::loading::LoadingHandle;

/// Home page component.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div>
            <HeroSection />
            <AboutSection />
            <ProjectsSection />
            <ContactSection />
        </div>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    use_section_ready(Section::Hero, 400);

    html! {
        <section class="hero">
            <h1>{"Experiments"}</h1>
            <p class="text-secondary">
                {"A personal playground of small tools: receipt scanning, \
                  reading practice, voice dictation, and more."}
            </p>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    use_section_ready(Section::About, 650);

    html! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">{"About"}</h2>
            </div>
            <p>
                {"Each project here started as a weekend question. The ones \
                  people find useful stick around; vote for the ones you'd \
                  like to see grow."}
            </p>
        </section>
    }
}

/// Projects preview section. Reports ready when its fetch resolves.
#[function_component(ProjectsSection)]
fn projects_section() -> Html {
    let handle = use_projects();
    let ctx = use_context::<LoadingHandle>();

    {
        let loading = handle.loading;
        use_effect_with(loading, move |&loading| {
            if !loading {
                if let Some(ctx) = &ctx {
                    ctx.on_section.emit((Section::Projects, true));
                }
            }
            move || {
                if let Some(ctx) = ctx {
                    ctx.on_section.emit((Section::Projects, false));
                }
            }
        });
    }

    html! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">{"Projects"}</h2>
                <Link<Route> to={Route::Projects} classes="btn btn-secondary">
                    {"See all"}
                </Link<Route>>
            </div>
            if handle.loading {
                <p class="text-secondary">{"Loading projects..."}</p>
            } else {
                <div class="project-list">
                    { for handle.projects.iter().take(3).map(|project| {
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
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    use_section_ready(Section::Contact, 900);

    html! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">{"Contact"}</h2>
            </div>
            <p>
                {"Found a bug, or want one of these as a real product? \
                  Open an issue on the repo."}
            </p>
        </section>
    }
}

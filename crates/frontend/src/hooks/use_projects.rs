//! Project list fetching and the optimistic vote hook.
//!
//! A burst of clicks on one project's vote button becomes a single network
//! call: each click bumps the displayed count immediately, and an 800 ms
//! debounce timer flushes the accumulated count once the burst pauses. The
//! server's response (the refreshed full list) replaces local state, which
//! reconciles any drift; on a failed flush the list is refetched instead,
//! discarding the optimistic delta.

use std::collections::HashMap;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use vote_flow::{DailyLedger, LEDGER_STORAGE_KEY, VOTE_DEBOUNCE_MS, VoteAccumulator};
use wasm_bindgen::JsValue;
use web_types::{Project, VoteRequest};
use yew::prelude::*;

/// View of the project list plus the vote entry point.
#[derive(Clone, PartialEq)]
pub struct ProjectsHandle {
    pub projects: Vec<Project>,
    /// True until the initial fetch resolves.
    pub loading: bool,
    /// Votes left under today's soft cap.
    pub votes_remaining_today: u32,
    /// Cast one vote for the given project id.
    pub vote: Callback<String>,
}

enum ProjectsAction {
    /// Replace local state with a server-authoritative list.
    Loaded(Vec<Project>),
    /// Optimistic +1 for one project.
    Bump(String),
}

#[derive(Default, PartialEq)]
struct ProjectsState {
    projects: Vec<Project>,
}

impl Reducible for ProjectsState {
    type Action = ProjectsAction;

    fn reduce(self: Rc<Self>, action: ProjectsAction) -> Rc<Self> {
        match action {
            ProjectsAction::Loaded(projects) => Rc::new(Self { projects }),
            ProjectsAction::Bump(id) => {
                let projects = self
                    .projects
                    .iter()
                    .cloned()
                    .map(|mut p| {
                        if p.id == id {
                            p.votes += 1;
                        }
                        p
                    })
                    .collect();
                Rc::new(Self { projects })
            }
        }
    }
}

/// Fetch the project list and expose debounced optimistic voting.
#[hook]
pub fn use_projects() -> ProjectsHandle {
    let state = use_reducer(ProjectsState::default);
    let loading = use_state(|| true);
    let remaining = use_state(|| load_ledger().remaining(&today_key()));
    let pending = use_mut_ref(VoteAccumulator::new);
    // One in-flight debounce timer per project id; replacing an entry
    // drops (and thereby cancels) the previous timer.
    let timers = use_mut_ref(HashMap::<String, Timeout>::new);

    // Initial fetch
    {
        let state = state.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_projects().await {
                    Ok(data) => state.dispatch(ProjectsAction::Loaded(data)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch projects: {}", e).into(),
                        );
                    }
                }
                loading.set(false);
            });
        });
    }

    let vote = {
        let state = state.clone();
        let remaining = remaining.clone();
        let pending = pending.clone();
        let timers = timers.clone();

        Callback::from(move |id: String| {
            let today = today_key();
            let mut ledger = load_ledger();
            if ledger.at_cap(&today) {
                // Soft cap reached: silently ignore, by design.
                return;
            }
            ledger.record(&today, 1);
            save_ledger(&ledger);
            remaining.set(ledger.remaining(&today));

            state.dispatch(ProjectsAction::Bump(id.clone()));
            pending.borrow_mut().record(&id);

            let flush = {
                let state = state.clone();
                let pending = pending.clone();
                let timers = timers.clone();
                let id = id.clone();
                move || {
                    timers.borrow_mut().remove(&id);
                    let count = pending.borrow_mut().take(&id);
                    if count == 0 {
                        return;
                    }
                    wasm_bindgen_futures::spawn_local(async move {
                        match flush_votes(&id, count).await {
                            Ok(list) => state.dispatch(ProjectsAction::Loaded(list)),
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Vote flush failed: {}", e).into(),
                                );
                                // Resync from the server, dropping the
                                // optimistic delta. No retry beyond this.
                                if let Ok(list) = fetch_projects().await {
                                    state.dispatch(ProjectsAction::Loaded(list));
                                }
                            }
                        }
                    });
                }
            };

            timers
                .borrow_mut()
                .insert(id, Timeout::new(VOTE_DEBOUNCE_MS, flush));
        })
    };

    ProjectsHandle {
        projects: state.projects.clone(),
        loading: *loading,
        votes_remaining_today: *remaining,
        vote,
    }
}

/// Today's ledger key, as a locale-formatted date string.
fn today_key() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &JsValue::UNDEFINED)
        .into()
}

fn load_ledger() -> DailyLedger {
    LocalStorage::get(LEDGER_STORAGE_KEY).unwrap_or_default()
}

fn save_ledger(ledger: &DailyLedger) {
    if let Err(e) = LocalStorage::set(LEDGER_STORAGE_KEY, ledger) {
        web_sys::console::error_1(&format!("Failed to persist vote history: {}", e).into());
    }
}

async fn fetch_projects() -> Result<Vec<Project>, gloo_net::Error> {
    Request::get("/api/projects")
        .send()
        .await?
        .json::<Vec<Project>>()
        .await
}

async fn flush_votes(id: &str, count: u32) -> Result<Vec<Project>, gloo_net::Error> {
    let req = VoteRequest {
        id: id.to_string(),
        count,
    };
    Request::post("/api/vote")
        .json(&req)?
        .send()
        .await?
        .json::<Vec<Project>>()
        .await
}

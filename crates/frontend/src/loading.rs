//! Loading-screen context provider.
//!
//! Owns the [`LoadGate`] state machine and republishes its derived view
//! (progress percentage + visibility flag) through a Yew context. Page
//! sections report readiness through the [`LoadingHandle::on_section`]
//! callback; a timer drives time-based transitions (the minimum display
//! hold and the exit delay).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use load_progress::{LoadGate, MIN_LOAD_TIME_MS, Section};
use yew::prelude::*;

/// How often the gate is advanced while the loading screen is visible.
const TICK_MS: u32 = 100;

/// Context value exposed to pages and the loading screen overlay.
#[derive(Clone, PartialEq)]
pub struct LoadingHandle {
    /// Shown progress, 0-100.
    pub progress: u8,
    /// Whether the loading screen is still visible.
    pub is_loading: bool,
    /// Section readiness callback: `(section, loaded)`.
    pub on_section: Callback<(Section, bool)>,
}

/// Properties for LoadingProvider.
#[derive(Properties, PartialEq)]
pub struct LoadingProviderProps {
    pub children: Children,
}

/// Provider component owning the loading-screen state machine.
#[function_component(LoadingProvider)]
pub fn loading_provider(props: &LoadingProviderProps) -> Html {
    // (progress, is_loading) snapshot that actually triggers re-renders.
    let view = use_state(|| (0u8, true));
    let gate = use_mut_ref(|| LoadGate::new(MIN_LOAD_TIME_MS));
    let started_at = *use_mut_ref(js_sys::Date::now).borrow();

    let publish = {
        let view = view.clone();
        let gate = gate.clone();
        Rc::new(move || {
            let gate = gate.borrow();
            let next = (gate.progress(), gate.is_loading());
            if *view != next {
                view.set(next);
            }
        })
    };

    // Drive time-based transitions until the screen is gone.
    {
        let gate = gate.clone();
        let publish = publish.clone();
        use_effect_with((), move |_| {
            let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let interval = {
                let handle = handle.clone();
                Interval::new(TICK_MS, move || {
                    let elapsed = elapsed_ms(started_at);
                    let done = {
                        let mut gate = gate.borrow_mut();
                        gate.tick(elapsed);
                        !gate.is_loading()
                    };
                    publish();
                    if done {
                        // Dropping the interval cancels it.
                        handle.borrow_mut().take();
                    }
                })
            };
            handle.borrow_mut().replace(interval);

            move || {
                handle.borrow_mut().take();
            }
        });
    }

    let on_section = {
        let gate = gate.clone();
        let publish = publish.clone();
        Callback::from(move |(section, loaded): (Section, bool)| {
            gate.borrow_mut()
                .set_section(section, loaded, elapsed_ms(started_at));
            publish();
        })
    };

    let context = LoadingHandle {
        progress: view.0,
        is_loading: view.1,
        on_section,
    };

    html! {
        <ContextProvider<LoadingHandle> {context}>
            { props.children.clone() }
        </ContextProvider<LoadingHandle>>
    }
}

fn elapsed_ms(started_at: f64) -> u64 {
    (js_sys::Date::now() - started_at).max(0.0) as u64
}

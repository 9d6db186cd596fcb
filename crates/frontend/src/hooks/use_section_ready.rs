//! Section readiness hook.

use gloo_timers::callback::Timeout;
use load_progress::Section;
use yew::prelude::*;

use crate::loading::LoadingHandle;

/// Mark `section` loaded after a fixed display delay, and unloaded again
/// when the owning component unmounts.
///
/// The delay is artificial: it staggers the loading bar so sections appear
/// to arrive over time instead of all at once.
#[hook]
pub fn use_section_ready(section: Section, delay_ms: u32) {
    let ctx = use_context::<LoadingHandle>();

    use_effect_with(section, move |&section| {
        let on_section = ctx.map(|c| c.on_section);

        let timeout = on_section.clone().map(|cb| {
            Timeout::new(delay_ms, move || {
                cb.emit((section, true));
            })
        });

        move || {
            // Cancels the timer if it has not fired yet.
            drop(timeout);
            if let Some(cb) = on_section {
                cb.emit((section, false));
            }
        }
    });
}

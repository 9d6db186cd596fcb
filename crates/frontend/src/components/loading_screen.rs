//! Loading screen overlay component.

use yew::prelude::*;

use crate::loading::LoadingHandle;

/// Full-page loading overlay bound to the loading context.
///
/// Stays in the DOM after completion so the hide transition can play; the
/// `hidden` class slides it away.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let Some(ctx) = use_context::<LoadingHandle>() else {
        return Html::default();
    };

    let class = if ctx.is_loading {
        "loading-screen"
    } else {
        "loading-screen hidden"
    };

    html! {
        <div {class}>
            <div class="loading-title">{"loading experiments"}</div>
            <div class="loading-bar-track">
                <div
                    class="loading-bar"
                    style={format!("width: {}%;", ctx.progress)}
                ></div>
            </div>
            <div class="loading-percent">{ format!("{}%", ctx.progress) }</div>
        </div>
    }
}

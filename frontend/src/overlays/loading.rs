use yew::prelude::*;

/// Full-page spinner shown while `visible`.
pub fn loading_overlay(visible: bool) -> Html {
    if !visible {
        return html! {};
    }
    html! {
        <div id="loadingOverlay" class="loading-overlay" role="status" aria-live="polite">
            <div class="spin"></div>
        </div>
    }
}

use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-utensils"></i> {" Food / Non-Food Detector"}</h1>
            <p class="subtitle">{"Upload an image and we'll call our model to predict the label with confidence."}</p>
        </header>
    }
}

use super::super::{Model, RequestState};
use serde_json::to_string_pretty;
use shared::Prediction;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let RequestState::Success(prediction) = &model.request else {
        return html! {};
    };

    let filename = model
        .selected
        .as_ref()
        .map(|selected| selected.file.name())
        .unwrap_or_else(|| "Analyzed image".to_string());

    html! {
        <div class={classes!("results-container", verdict_class(prediction.is_food))}>
            <div class="result-header">
                <h2 title={format!("Prediction for: {}", filename)}>
                    { render_verdict(prediction) }
                    <span class="analyzed-filename-display">{format!("({})", filename)}</span>
                </h2>
            </div>
            { render_label_line(prediction) }
            { render_guess_line(prediction) }
            { render_confidence_meter(prediction) }
            { render_raw_panel(prediction) }
        </div>
    }
}

fn verdict_class(is_food: Option<bool>) -> &'static str {
    match is_food {
        Some(true) => "food-detected",
        Some(false) => "not-food",
        None => "verdict-unknown",
    }
}

fn render_verdict(prediction: &Prediction) -> Html {
    match prediction.is_food {
        Some(true) => html! {
            <span class="badge food"><i class="fa-solid fa-utensils"></i>{" Food"}</span>
        },
        Some(false) => html! {
            <span class="badge not"><i class="fa-solid fa-ban"></i>{" Non-Food"}</span>
        },
        None => html! {
            <span class="badge unknown"><i class="fa-solid fa-circle-question"></i>{" Unclassified"}</span>
        },
    }
}

fn render_label_line(prediction: &Prediction) -> Html {
    match &prediction.label {
        Some(label) => html! {
            <div class="result-line">{"Label: "}<strong>{ label.clone() }</strong></div>
        },
        None => html! {},
    }
}

fn render_guess_line(prediction: &Prediction) -> Html {
    match &prediction.food_guess {
        Some(guess) => html! {
            <div class="result-line">{"Guess: "}<strong>{ guess.clone() }</strong></div>
        },
        None => html! {},
    }
}

fn render_confidence_meter(prediction: &Prediction) -> Html {
    let Some(percent) = prediction.confidence_percent else {
        return html! {};
    };

    html! {
        <div class="confidence-meter">
            <div class="meter-label">{"Confidence:"}</div>
            <div class="meter">
                <div class="meter-fill" style={format!("width: {}%", percent)}></div>
            </div>
            <div class="meter-value">{format!("{}%", percent)}</div>
        </div>
    }
}

fn render_raw_panel(prediction: &Prediction) -> Html {
    html! {
        <details class="raw-response">
            <summary>{"Raw response"}</summary>
            <pre>{ to_string_pretty(&prediction.raw).unwrap_or_default() }</pre>
        </details>
    }
}

use super::super::{Model, Msg};
use super::utils::{debounce, trigger_file_input};
use shared::NormalizePolicy;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_actions(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let loading = model.request.is_loading();

    html! {
        <div class="actions">
            { render_policy_selector(model, ctx) }
            <div class="button-container">
                <button
                    id="choose-button"
                    class="action-btn"
                    disabled={loading}
                    onclick={debounce(300, {
                        let trigger_file_input = trigger_file_input();
                        move || trigger_file_input.emit(())
                    })}
                >
                    <i class="fa-solid fa-upload"></i>{" Choose Image"}
                </button>
                <button
                    id="predict-button"
                    class="action-btn primary"
                    disabled={loading || model.selected.is_none()}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Submit)
                    })}
                >
                    { render_predict_button_content(loading) }
                </button>
                { render_clear_button(model, &link) }
            </div>
        </div>
    }
}

fn render_policy_selector(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="policy-selector">
            <label>
                <input type="radio" name="normalize_policy"
                       value="server"
                       checked={model.policy == NormalizePolicy::ServerAuthoritative}
                       onchange={ctx.link().callback(|_| Msg::SetPolicy(NormalizePolicy::ServerAuthoritative))} />
                <span class="radio-label-text">{ "Server verdict" }</span>
            </label>
            <label>
                <input type="radio" name="normalize_policy"
                       value="label"
                       checked={model.policy == NormalizePolicy::ClientInferred}
                       onchange={ctx.link().callback(|_| Msg::SetPolicy(NormalizePolicy::ClientInferred))} />
                <span class="radio-label-text">{ "Label heuristic" }</span>
            </label>
        </div>
    }
}

fn render_predict_button_content(loading: bool) -> Html {
    if loading {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Predicting..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Predict"}</> }
    }
}

fn render_clear_button(model: &Model, link: &Scope<Model>) -> Html {
    if model.selected.is_none() {
        return html! {};
    }

    html! {
        <button
            id="clear-button"
            class="action-btn"
            style="background-color: var(--clear-color);"
            disabled={model.request.is_loading()}
            onclick={debounce(300, {
                let link = link.clone();
                move || link.send_message(Msg::ClearSelection)
            })}
        >
            <i class="fa-solid fa-trash"></i>{" Clear"}
        </button>
    }
}

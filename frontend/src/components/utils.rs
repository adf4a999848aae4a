use super::super::{Model, Msg, RequestState};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Forwards a click to the hidden file input.
pub fn trigger_file_input() -> Callback<()> {
    Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));

        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    })
}

pub fn render_error_message(model: &Model, ctx: &Context<Model>) -> Html {
    let request_error = match &model.request {
        RequestState::Failed(error) => Some(error),
        _ => None,
    };
    let Some(error) = model.validation_error.as_ref().or(request_error) else {
        return html! {};
    };

    html! {
        <div class="error-message">
            <i class="fa-solid fa-circle-exclamation"></i>
            <p><strong>{"Error: "}</strong>{ error.to_string() }</p>
            <button
                class="dismiss-btn"
                title="Dismiss"
                onclick={ctx.link().callback(|_| Msg::DismissError)}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}

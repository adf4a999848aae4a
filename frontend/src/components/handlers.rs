use super::super::{Model, Msg, RequestState, SelectedImage};
use crate::config;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{NormalizePolicy, PredictError, Prediction, normalize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn handle_file_selected(model: &mut Model, raw: web_sys::File) -> bool {
    if !raw.type_().starts_with("image/") {
        log::warn!("Rejecting non-image file: {} ({})", raw.name(), raw.type_());
        model.validation_error = Some(PredictError::not_an_image());
        return true;
    }

    // Atomic replacement; the previous preview handle is revoked on drop.
    model.selected = Some(SelectedImage::new(GlooFile::from(raw)));
    model.request = RequestState::Idle;
    model.validation_error = None;
    model.submission += 1;
    true
}

pub fn handle_clear_selection(model: &mut Model) -> bool {
    model.selected = None;
    model.request = RequestState::Idle;
    model.validation_error = None;
    model.submission += 1;
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.request.is_loading() {
        return false;
    }

    let Some(selected) = model.selected.as_ref() else {
        log::warn!("Submit without a selected file; no request sent");
        model.validation_error = Some(PredictError::no_file());
        return true;
    };

    model.submission += 1;
    model.request = RequestState::Loading;
    model.validation_error = None;
    send_predict_request(ctx, model.submission, selected.file.clone(), model.policy);
    true
}

pub fn handle_completed(model: &mut Model, submission: u64, prediction: Prediction) -> bool {
    if submission != model.submission || !model.request.is_loading() {
        log::warn!("Dropping response for an abandoned submission");
        return false;
    }
    model.request = RequestState::Success(prediction);
    true
}

pub fn handle_request_failed(model: &mut Model, submission: u64, error: PredictError) -> bool {
    if submission != model.submission || !model.request.is_loading() {
        log::warn!("Dropping failure for an abandoned submission: {error}");
        return false;
    }
    log::error!("Prediction request failed: {error}");
    model.request = RequestState::Failed(error);
    true
}

pub fn handle_dismiss_error(model: &mut Model) -> bool {
    let dismissed_failure = matches!(model.request, RequestState::Failed(_));
    if dismissed_failure {
        model.request = RequestState::Idle;
    }
    model.validation_error.take().is_some() || dismissed_failure
}

pub fn handle_set_policy(model: &mut Model, policy: NormalizePolicy) -> bool {
    if model.policy == policy {
        return false;
    }
    log::info!("Normalization policy set to {policy}");
    model.policy = policy;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        forward_first_file(ctx, &file_list);
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|dt| dt.files()) {
        if file_list.length() > 0 {
            event.prevent_default();
            forward_first_file(ctx, &file_list);
            return true;
        }
    }
    false
}

// Helper methods

/// Single-selection model: only the first dropped or pasted file is taken.
fn forward_first_file(ctx: &Context<Model>, file_list: &FileList) {
    if file_list.length() > 1 {
        log::warn!(
            "Ignoring {} extra file(s); only one image is used",
            file_list.length() - 1
        );
    }
    if let Some(file) = file_list.item(0) {
        ctx.link().send_message(Msg::FileSelected(file));
    }
}

fn send_predict_request(
    ctx: &Context<Model>,
    submission: u64,
    file: GlooFile,
    policy: NormalizePolicy,
) {
    spawn_local({
        let link = ctx.link().clone();
        let url = config::predict_endpoint();

        async move {
            let form_data = web_sys::FormData::new().unwrap();
            form_data
                .append_with_blob_and_filename("image", file.as_ref(), &file.name())
                .unwrap();

            let request = match Request::post(&url).body(form_data) {
                Ok(request) => request,
                Err(e) => {
                    let error = PredictError::transport(e.to_string());
                    link.send_message(Msg::RequestFailed(submission, error));
                    return;
                }
            };

            match request.send().await {
                Ok(response) if response.ok() => {
                    match response.json::<serde_json::Value>().await {
                        Ok(body) => {
                            link.send_message(Msg::Completed(submission, normalize(body, policy)))
                        }
                        Err(e) => {
                            let error = PredictError::transport(e.to_string());
                            link.send_message(Msg::RequestFailed(submission, error));
                        }
                    }
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    let error = PredictError::server(status, body);
                    link.send_message(Msg::RequestFailed(submission, error));
                }
                Err(e) => {
                    let error = PredictError::transport(e.to_string());
                    link.send_message(Msg::RequestFailed(submission, error));
                }
            }
        }
    });
}

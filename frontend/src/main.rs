use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{NormalizePolicy, PredictError, Prediction};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

mod components;
mod config;

use components::actions::render_actions;
use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;

// Models
pub struct SelectedImage {
    file: GlooFile,
    /// Revokes its blob URL on drop, so replacing the selection releases
    /// the previous preview handle.
    preview_url: ObjectUrl,
}

impl SelectedImage {
    fn new(file: GlooFile) -> Self {
        Self {
            preview_url: ObjectUrl::from(file.clone()),
            file,
        }
    }
}

/// Lifecycle of the current submission.
pub enum RequestState {
    Idle,
    Loading,
    Success(Prediction),
    Failed(PredictError),
}

impl RequestState {
    fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

// Yew msg components
pub enum Msg {
    // File operations
    FileSelected(web_sys::File),
    ClearSelection,

    // Prediction operations
    Submit,
    Completed(u64, Prediction),
    RequestFailed(u64, PredictError),

    // UI states
    DismissError,
    SetDragging(bool),
    SetPolicy(NormalizePolicy),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    selected: Option<SelectedImage>,
    request: RequestState,
    validation_error: Option<PredictError>,
    is_dragging: bool,
    policy: NormalizePolicy,
    /// Id of the latest submission; completions carrying an older id are
    /// dropped instead of overwriting newer state.
    submission: u64,
    paste_listener: Option<EventListener>,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            selected: None,
            request: RequestState::Idle,
            validation_error: None,
            is_dragging: false,
            policy: NormalizePolicy::default(),
            submission: 0,
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),
            Msg::ClearSelection => handlers::handle_clear_selection(self),

            // Prediction operations
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Completed(submission, prediction) => {
                handlers::handle_completed(self, submission, prediction)
            }
            Msg::RequestFailed(submission, error) => {
                handlers::handle_request_failed(self, submission, error)
            }

            // UI states
            Msg::DismissError => handlers::handle_dismiss_error(self),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::SetPolicy(policy) => handlers::handle_set_policy(self, policy),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_upload_section(self, ctx) }
                    { render_actions(self, ctx) }
                    { render_error_message(self, ctx) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Food / Non-Food Detector | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting, prediction endpoint: {}", config::predict_endpoint());
    yew::Renderer::<Model>::new().render();
}

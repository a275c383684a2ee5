use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    config::Config,
    conversation::{ConversationEntry, ConversationStore},
    error::CopilotError,
    filter::filter_response,
    hf_llm::HuggingFaceLLM,
    host::Host,
    llm::{LLMClient, TextGeneration},
    models::{ModelOption, find_model},
    prompt::build_inputs,
    view::{PanelView, RequestState},
};

/// Start a session for `host`.
///
/// A config error is reported once through the host and leaves the feature
/// disabled, so `None` is returned.
pub fn start(host: Arc<dyn Host>, config: Result<Config, CopilotError>) -> Option<Copilot> {
    match config {
        Ok(config) => {
            let llm = Arc::new(HuggingFaceLLM::from_config(&config));
            Some(Copilot::with_client(host, config, llm))
        }
        Err(err) => {
            warn!(%err, "copilot disabled");
            host.show_error(&err.to_string());
            None
        }
    }
}

/// Session-scoped controller owning the conversation and model selection.
///
/// All state lives here; hosts drive it through [`Copilot::select_model`] and
/// [`Copilot::explain_selection`] (or [`Copilot::execute`]) and receive a
/// [`PanelView`] whenever the panel needs redrawing.
pub struct Copilot {
    host: Arc<dyn Host>,
    llm: Arc<dyn LLMClient>,
    store: ConversationStore,
    models: Vec<ModelOption>,
    selected_model: String,
    preamble: String,
    max_new_tokens: u32,
    state: RequestState,
}

impl Copilot {
    /// Create a session using an explicit backend.
    pub fn with_client(host: Arc<dyn Host>, config: Config, llm: Arc<dyn LLMClient>) -> Self {
        let settings = config.settings;
        info!(model = %settings.default_model, "copilot is now active");
        let copilot = Self {
            host,
            llm,
            store: ConversationStore::new(),
            models: settings.models,
            selected_model: settings.default_model,
            preamble: settings.preamble,
            max_new_tokens: settings.max_new_tokens,
            state: RequestState::Idle,
        };
        copilot.host.render(&copilot.view());
        copilot
    }

    /// End the session. The conversation is discarded.
    pub fn stop(self) {
        info!(entries = self.store.len(), "copilot stopped");
    }

    /// Current panel contents.
    pub fn view(&self) -> PanelView {
        PanelView::new(self.store.snapshot(), self.state == RequestState::Loading)
    }

    pub fn history(&self) -> &[ConversationEntry] {
        self.store.entries()
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    pub fn models(&self) -> &[ModelOption] {
        &self.models
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Let the user pick the model used for following requests.
    pub async fn select_model(&mut self) -> Result<(), CopilotError> {
        let picked = self.host.pick_model(&self.models).await;
        let known = picked
            .as_ref()
            .and_then(|m| find_model(&self.models, &m.label))
            .cloned();
        match known {
            Some(model) => {
                info!(model = %model.label, "model selected");
                self.selected_model = model.label;
                self.host
                    .show_info(&format!("Model changed to {}", model.description));
                Ok(())
            }
            None => {
                debug!(?picked, "model selection rejected");
                let err = CopilotError::InvalidModelSelection;
                self.host.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Send the editor selection to the backend and record the answer.
    pub async fn explain_selection(&mut self) -> Result<(), CopilotError> {
        let selection = match self.host.selection() {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                let err = CopilotError::EmptySelection;
                self.host.show_error(&err.to_string());
                return Err(err);
            }
        };

        self.state = RequestState::Loading;
        self.host.render(&self.view());
        self.host
            .show_info(&format!("Generating with {}", self.selected_model));

        let request = TextGeneration {
            model: self.selected_model.clone(),
            inputs: build_inputs(&self.preamble, &selection),
            max_new_tokens: self.max_new_tokens,
        };
        debug!(model = %request.model, chars = selection.len(), "sending selection");
        let result = self.llm.generate(&request).await;
        self.state = RequestState::Idle;

        match result {
            Ok(generated) => {
                let response = filter_response(&generated, &self.preamble, &selection);
                self.store.append(selection, response);
                info!(entries = self.store.len(), "response recorded");
                self.host.render(&self.view());
                Ok(())
            }
            Err(e) => {
                let err = CopilotError::Generation(e);
                warn!(%err, "generation failed");
                self.host.show_error(&err.to_string());
                self.host.render(&self.view());
                Err(err)
            }
        }
    }
}

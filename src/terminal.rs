use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error, info};

use crate::host::Host;
use crate::models::ModelOption;
use crate::render::render_html;
use crate::view::PanelView;

/// [`Host`] backed by a terminal.
///
/// The "selection" is whatever text was last handed to
/// [`TerminalHost::set_selection`]; the panel is written as an HTML file.
pub struct TerminalHost {
    selection: Mutex<Option<String>>,
    panel_path: PathBuf,
}

impl TerminalHost {
    pub fn new(panel_path: impl Into<PathBuf>) -> Self {
        Self {
            selection: Mutex::new(None),
            panel_path: panel_path.into(),
        }
    }

    /// Replace the current selection.
    pub fn set_selection(&self, text: impl Into<String>) {
        let mut guard = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(text.into());
    }

    pub fn panel_path(&self) -> &Path {
        &self.panel_path
    }
}

#[async_trait]
impl Host for TerminalHost {
    fn selection(&self) -> Option<String> {
        self.selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn pick_model(&self, options: &[ModelOption]) -> Option<ModelOption> {
        let options = options.to_vec();
        let picked = tokio::task::spawn_blocking(move || {
            inquire::Select::new("Select a model for code generation", options).prompt()
        })
        .await;
        match picked {
            Ok(Ok(model)) => Some(model),
            Ok(Err(e)) => {
                debug!(%e, "model picker closed");
                None
            }
            Err(e) => {
                error!(%e, "model picker task failed");
                None
            }
        }
    }

    fn show_info(&self, message: &str) {
        eprintln!("[info] {message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("[error] {message}");
    }

    /// Writes the page with a blocking `std::fs::write`. The file is small
    /// and the session renders between awaits, so this runs on the caller's
    /// task.
    fn render(&self, view: &PanelView) {
        let html = match render_html(view) {
            Ok(html) => html,
            Err(e) => {
                error!(%e, "failed to render panel");
                return;
            }
        };
        match std::fs::write(&self.panel_path, html) {
            Ok(()) => info!(
                path = %self.panel_path.display(),
                entries = view.entries.len(),
                loading = view.loading,
                "panel updated"
            ),
            Err(e) => error!(%e, path = %self.panel_path.display(), "failed to write panel"),
        }
    }
}

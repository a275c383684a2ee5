use async_trait::async_trait;

use crate::models::ModelOption;
use crate::view::PanelView;

/// Editor-side services a session relies on.
///
/// Implementations may wrap a real editor plugin API, a terminal, or a test
/// double.
///
/// # Example
///
/// ```no_run
/// use personal_copilot::{host::Host, models::ModelOption, view::PanelView};
/// use async_trait::async_trait;
///
/// struct Quiet;
///
/// #[async_trait]
/// impl Host for Quiet {
///     fn selection(&self) -> Option<String> { None }
///     async fn pick_model(&self, _options: &[ModelOption]) -> Option<ModelOption> { None }
///     fn show_info(&self, _message: &str) {}
///     fn show_error(&self, message: &str) { eprintln!("{message}"); }
///     fn render(&self, _view: &PanelView) {}
/// }
/// ```
#[async_trait]
pub trait Host: Send + Sync {
    /// Text currently selected in the active editor, if there is one.
    fn selection(&self) -> Option<String>;

    /// Present `options` and return the user's choice, or `None` on cancel.
    async fn pick_model(&self, options: &[ModelOption]) -> Option<ModelOption>;

    fn show_info(&self, message: &str);

    fn show_error(&self, message: &str);

    /// Redraw the side panel.
    fn render(&self, view: &PanelView);
}

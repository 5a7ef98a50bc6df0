//! Rendering seam for the lookup surfaces.
//!
//! The original rendered into a browser document; here the renderer is a
//! trait so the reconciliation logic can be exercised against a recording
//! fake. Three surfaces: the prediction display, the gender selector, and
//! the saved-answer panel, plus transient notices.

pub mod terminal;

pub use terminal::TerminalView;

use crate::client::{Gender, Prediction};
use crate::notice::Notice;
use crate::store::SavedName;

/// What the user currently sees, independent of any renderer.
///
/// Predicted and confirmed gender are tracked separately: a prediction
/// pre-selects the selector, but only an explicit save confirms it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Last prediction shown, if any.
    pub prediction: Option<Prediction>,
    /// Gender suggested by the last prediction.
    pub predicted_gender: Option<Gender>,
    /// Gender currently chosen in the selector.
    pub confirmed_gender: Option<Gender>,
    /// Entry shown in the saved-answer panel, if any.
    pub saved: Option<SavedName>,
}

/// Renderer for the lookup surfaces.
pub trait View {
    /// Render a prediction ("Gender: ...", "Prob: ...").
    fn show_prediction(&mut self, prediction: &Prediction);

    /// Set the gender selector. `None` clears the selection.
    fn select_gender(&mut self, gender: Option<Gender>);

    /// Render the saved-answer panel; `None` renders "Nothing!".
    fn show_saved_answer(&mut self, saved: Option<&SavedName>);

    /// Render a transient notice.
    fn show_notice(&mut self, notice: &Notice);
}

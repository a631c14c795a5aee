use shared_types::FormKind;

use crate::onboarding::OnboardingContext;
use crate::panel::Panel;
use crate::validation::FieldValues;

/// The page the controller drives.
///
/// Implementations own the markup; the controller only tells them what to
/// show. All calls happen on the UI thread.
pub trait FormView {
    /// Make `panel` the only visible panel.
    fn show_panel(&self, panel: Panel);

    /// Current contents of the form's fields.
    fn field_values(&self, form: FormKind) -> FieldValues;

    /// Enable or disable the form's inputs and its submit button.
    fn set_form_enabled(&self, form: FormKind, enabled: bool);

    /// Show or hide the form's busy indicator.
    fn set_busy(&self, form: FormKind, busy: bool);

    /// Enable or disable the login/signup switch links.
    fn set_links_enabled(&self, enabled: bool);

    /// Blocking message to the user.
    fn show_message(&self, message: &str);

    /// Fill the onboarding panel. Called before it is shown.
    fn show_onboarding(&self, context: &OnboardingContext);

    /// Leave the page for `uri`.
    fn navigate(&self, uri: &str);

    /// URL of the page the form lives on.
    fn page_url(&self) -> String;
}

use serde::{Deserialize, Serialize};

/// One of the three mutually exclusive views on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    Login,
    Signup,
    Onboarding,
}

impl Panel {
    /// Whether a login/signup link may switch to this panel.
    pub fn is_linkable(self) -> bool {
        !matches!(self, Panel::Onboarding)
    }
}

//! Auth form controller for the account portal's login page.
//!
//! The controller drives three mutually exclusive panels (login, signup,
//! onboarding), validates credentials, submits them to the token endpoint
//! under a timeout, and hands the returned authorization code to the native
//! client. Everything page-specific sits behind [`FormView`],
//! [`AuthTransport`] and [`Timer`], so the state machine runs the same in the
//! browser and in tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod obfuscate;
pub mod onboarding;
pub mod panel;
pub mod transport;
pub mod validation;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::{FormConfig, FormVariant};
pub use controller::{AuthFormController, SubmissionState};
pub use error::{ConfigError, SubmitError, ValidationError};
pub use onboarding::OnboardingContext;
pub use panel::Panel;
pub use shared_types::FormKind;
pub use transport::{AuthTransport, OutgoingRequest, Timer, TransportError, TransportResponse};
pub use validation::{Credentials, FieldValues};
pub use view::FormView;

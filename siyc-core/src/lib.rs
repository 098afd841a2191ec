//! SIYC Registration Engine
//!
//! Platform-agnostic logic for the SIYC event landing page: form validation, the registration
//! call, page navigation, the payment gate and the timers' numeric models.
//! This crate has no DOM dependencies; the web crate supplies the browser transport and timers.

pub mod config;
pub mod countdown;
pub mod desk;
pub mod loading;
pub mod navigator;
pub mod payment;
pub mod presenter;
pub mod registration;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use config::{ApiConfig, ConfigError};
pub use countdown::{EVENT_START_MS, Remaining, remaining};
pub use desk::{CONFIRMATION_DELAY_MS, RegistrationDesk, SubmitOutcome};
pub use loading::LoadingProgress;
pub use navigator::{NavEffect, NavigationError, PageId, PageNavigator, Transition};
pub use payment::{
    COMPLETION_DELAY_MS, PaymentError, PaymentGate, PaymentProof, ProofError, check_proof,
    evaluate,
};
pub use presenter::{ErrorBoard, ErrorCategory, ErrorSlot, GENERAL_ERROR_TTL_MS, OFFLINE_MESSAGE};
pub use registration::{
    RegistrationClient, RegistrationError, RegistrationInput, RegistrationTransport, ServerAck,
    TransportFailure, TransportRequest, TransportResponse,
};
#[cfg(feature = "async")]
pub use registration::TimeoutTransport;
pub use session::{AttendeeStatus, Price, SessionState};
pub use validation::{Field, FieldError, FormReport, RegistrationDraft, validate_field, validate_form};

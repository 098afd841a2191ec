//! Submission lifecycle of the registration form.

use std::cell::Cell;

use crate::presenter::{ErrorBoard, ErrorSlot};
use crate::registration::{
    RegistrationClient, RegistrationError, RegistrationTransport, ServerAck,
};
use crate::session::{AttendeeStatus, SessionState};
use crate::validation::{FormReport, RegistrationDraft, validate_form};

/// How long the confirmation popup stays up before moving to the payment page.
pub const CONFIRMATION_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Registered {
        status: AttendeeStatus,
        ack: ServerAck,
    },
    /// Validation failed; nothing was sent.
    Invalid(FormReport),
    /// Another submission is still outstanding; nothing was sent.
    Busy,
    Failed(RegistrationError),
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }

    /// Store the registered status so the payment page can price it.
    ///
    /// Returns `true` when the session changed.
    pub fn record_into(&self, session: &mut SessionState) -> bool {
        match self {
            Self::Registered { status, .. } => {
                session.record_registration(*status);
                true
            }
            _ => false,
        }
    }

    /// Update on-screen messages. Field messages come from the report; request failures go to
    /// the general banner.
    pub fn present(&self, board: &mut ErrorBoard) {
        match self {
            Self::Invalid(report) => board.apply_report(report),
            Self::Failed(err) => board.show(ErrorSlot::General, err.to_string()),
            Self::Registered { .. } => board.clear(ErrorSlot::General),
            Self::Busy => {}
        }
    }
}

/// Resets the in-flight flag however the submission ends.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn claim(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Owns one form's submissions: at most one request in flight at a time.
pub struct RegistrationDesk<T> {
    client: RegistrationClient<T>,
    in_flight: Cell<bool>,
}

impl<T> RegistrationDesk<T>
where
    T: RegistrationTransport,
{
    pub const fn new(client: RegistrationClient<T>) -> Self {
        Self {
            client,
            in_flight: Cell::new(false),
        }
    }

    pub const fn client(&self) -> &RegistrationClient<T> {
        &self.client
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn submit(&self, draft: &RegistrationDraft) -> SubmitOutcome {
        if self.in_flight.get() {
            log::warn!("registration: submit ignored, a request is already in flight");
            return SubmitOutcome::Busy;
        }
        let input = match validate_form(draft) {
            Ok(input) => input,
            Err(report) => {
                log::warn!(
                    "registration: form invalid ({} field(s))",
                    report.errors().len()
                );
                return SubmitOutcome::Invalid(report);
            }
        };
        let Some(_guard) = InFlight::claim(&self.in_flight) else {
            return SubmitOutcome::Busy;
        };

        match self.client.submit(&input).await {
            Ok(ack) => SubmitOutcome::Registered {
                status: input.status,
                ack,
            },
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::registration::{TransportFailure, TransportRequest, TransportResponse};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Holds every request until the test releases it.
    struct Gated {
        calls: Cell<usize>,
        release: RefCell<Option<oneshot::Receiver<TransportResponse>>>,
    }

    #[async_trait(?Send)]
    impl RegistrationTransport for Gated {
        async fn post_json(
            &self,
            _request: &TransportRequest,
        ) -> Result<TransportResponse, TransportFailure> {
            self.calls.set(self.calls.get() + 1);
            let pending = self.release.borrow_mut().take();
            match pending {
                Some(rx) => rx
                    .await
                    .map_err(|_| TransportFailure::Unreachable("dropped".into())),
                None => Err(TransportFailure::Unreachable("no response scripted".into())),
            }
        }
    }

    struct Fixed(u16, &'static str);

    #[async_trait(?Send)]
    impl RegistrationTransport for Fixed {
        async fn post_json(
            &self,
            _request: &TransportRequest,
        ) -> Result<TransportResponse, TransportFailure> {
            Ok(TransportResponse::new(self.0, self.1))
        }
    }

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Kiran".into(),
            email: "kiran@example.org".into(),
            phone: "9876543210".into(),
            status: Some("couple".into()),
        }
    }

    fn desk<T: RegistrationTransport>(transport: T) -> RegistrationDesk<T> {
        RegistrationDesk::new(RegistrationClient::new(ApiConfig::default(), transport))
    }

    #[test]
    fn second_submit_while_outstanding_is_rejected() {
        let (tx, rx) = oneshot::channel();
        let desk = desk(Gated {
            calls: Cell::new(0),
            release: RefCell::new(Some(rx)),
        });
        let form = draft();

        let (first, second) = block_on(async {
            futures::join!(desk.submit(&form), async {
                assert!(desk.is_submitting());
                let second = desk.submit(&form).await;
                let _ = tx.send(TransportResponse::new(201, r#"{"id":"abc"}"#));
                second
            })
        });

        assert_eq!(second, SubmitOutcome::Busy);
        assert!(first.is_registered());
        assert_eq!(desk.client().transport().calls.get(), 1);
        assert!(!desk.is_submitting());
    }

    #[test]
    fn invalid_form_sends_nothing() {
        let desk = desk(Gated {
            calls: Cell::new(0),
            release: RefCell::new(None),
        });
        let mut form = draft();
        form.email = "kiran@".into();

        let outcome = block_on(desk.submit(&form));
        let SubmitOutcome::Invalid(report) = &outcome else {
            panic!("expected invalid outcome, got {outcome:?}");
        };
        assert_eq!(report.errors().len(), 1);
        assert_eq!(desk.client().transport().calls.get(), 0);

        let mut board = ErrorBoard::default();
        outcome.present(&mut board);
        assert_eq!(
            board.message(ErrorSlot::Field(crate::validation::Field::Email)),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn success_records_status_in_session() {
        let desk = desk(Fixed(201, r#"{"id":"abc"}"#));
        let outcome = block_on(desk.submit(&draft()));
        let mut session = SessionState::default();
        assert!(outcome.record_into(&mut session));
        assert_eq!(session.last_status(), Some(AttendeeStatus::Couple));
        assert_eq!(session.price().map(|p| p.rupees), Some(1400));
    }

    #[test]
    fn failure_reopens_form_and_shows_banner() {
        let desk = desk(Fixed(400, r#"{"error":"duplicate email"}"#));
        let outcome = block_on(desk.submit(&draft()));
        assert!(!desk.is_submitting());

        let mut session = SessionState::default();
        assert!(!outcome.record_into(&mut session));
        assert_eq!(session.last_status(), None);

        let mut board = ErrorBoard::default();
        outcome.present(&mut board);
        assert_eq!(board.message(ErrorSlot::General), Some("duplicate email"));

        let retry = block_on(desk.submit(&draft()));
        assert!(matches!(retry, SubmitOutcome::Failed(_)));
    }
}

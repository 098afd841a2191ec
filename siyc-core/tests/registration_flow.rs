use async_trait::async_trait;
use futures::executor::block_on;
use std::cell::Cell;

use siyc_core::{
    ApiConfig, AttendeeStatus, ErrorBoard, ErrorSlot, Field, PageId, PageNavigator, PaymentGate,
    PaymentProof, RegistrationClient, RegistrationDesk, RegistrationDraft, RegistrationTransport,
    SessionState, SubmitOutcome, TransportFailure, TransportRequest, TransportResponse,
    validate_form,
};

struct Backend {
    status: u16,
    body: &'static str,
    calls: Cell<usize>,
}

impl Backend {
    fn replying(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl RegistrationTransport for Backend {
    async fn post_json(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportFailure> {
        assert!(request.url.ends_with("/register"));
        self.calls.set(self.calls.get() + 1);
        Ok(TransportResponse::new(self.status, self.body))
    }
}

fn draft(status: &str) -> RegistrationDraft {
    RegistrationDraft {
        name: "Priya Nair".into(),
        email: "priya@example.in".into(),
        phone: "98450-12345".into(),
        status: Some(status.into()),
    }
}

#[test]
fn single_invalid_field_reports_only_that_reason() {
    let draft = RegistrationDraft {
        name: "A".into(),
        email: "a@b.co".into(),
        phone: "1234567890".into(),
        status: Some("single".into()),
    };
    let report = validate_form(&draft).unwrap_err();
    assert_eq!(report.errors().len(), 1);
    assert_eq!(
        report.error_for(Field::Name).map(|e| e.to_string()),
        Some("Name must be at least 2 characters".into())
    );
}

#[test]
fn registration_through_payment_returns_home() {
    let mut nav = PageNavigator::with_active(PageId::Home);
    let mut session = SessionState::default();
    let mut board = ErrorBoard::default();

    nav.show("registration").unwrap();
    let desk = RegistrationDesk::new(RegistrationClient::new(
        ApiConfig::default(),
        Backend::replying(201, r#"{"id":"abc"}"#),
    ));
    let outcome = block_on(desk.submit(&draft("single")));
    outcome.present(&mut board);
    assert!(outcome.record_into(&mut session));
    assert!(board.is_empty());
    assert_eq!(desk.client().transport().calls.get(), 1);

    let entered = nav.show("payment").unwrap();
    assert!(entered.enters_payment());
    assert_eq!(session.price().map(|p| p.to_string()), Some("₹799".into()));

    let mut gate = PaymentGate::default();
    assert!(!gate.is_enabled());
    gate.attach(PaymentProof::new("image/jpeg", 1024 * 1024))
        .unwrap();
    assert!(gate.is_enabled());
    gate.complete().unwrap();

    nav.show("home").unwrap();
    assert_eq!(nav.active(), Some(PageId::Home));
    assert_eq!(session.last_status(), Some(AttendeeStatus::Single));
}

#[test]
fn duplicate_registration_stays_on_form() {
    let mut nav = PageNavigator::with_active(PageId::Registration);
    let mut session = SessionState::default();
    let mut board = ErrorBoard::default();
    let desk = RegistrationDesk::new(RegistrationClient::new(
        ApiConfig::default(),
        Backend::replying(400, r#"{"error":"duplicate email"}"#),
    ));

    let outcome = block_on(desk.submit(&draft("couple")));
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    outcome.present(&mut board);
    assert!(!outcome.record_into(&mut session));

    assert_eq!(board.message(ErrorSlot::General), Some("duplicate email"));
    assert_eq!(nav.active(), Some(PageId::Registration));
    assert!(!desk.is_submitting());
    assert!(nav.show("settings").is_err());
    assert_eq!(nav.active(), Some(PageId::Registration));
}

use anyhow::{Result, anyhow, ensure};
use siyc_core::{
    AttendeeStatus, ErrorBoard, ErrorCategory, ErrorSlot, Field, FieldError, RegistrationDraft,
    RegistrationError, SessionState, SubmitOutcome, TimeoutTransport, TransportFailure,
    validate_form,
};
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, LogicOnlyScenario, ScenarioCtx, TestScenario, boot,
};
use crate::logic::transports::{ScriptedTransport, StalledTransport, desk};
use crate::logic::{CheckFuture, LogicCtx, LogicPlan};

fn draft(name: &str, email: &str, phone: &str, status: Option<&str>) -> RegistrationDraft {
    RegistrationDraft {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status: status.map(str::to_string),
    }
}

fn valid_draft(status: &str) -> RegistrationDraft {
    draft("Asha Rao", "asha@example.com", "98765 43210", Some(status))
}

fn failed_with(outcome: &SubmitOutcome) -> Result<&RegistrationError> {
    match outcome {
        SubmitOutcome::Failed(err) => Ok(err),
        other => Err(anyhow!("expected a failed submission, got {other:?}")),
    }
}

// Form validation

pub struct ValidationScenario;

impl ValidationScenario {
    fn plan() -> LogicPlan {
        LogicPlan::new()
            .with_check("one bad field reports only itself", one_bad_field)
            .with_check("empty form reports every field", empty_form)
            .with_check("payload keeps trimmed input", payload_is_trimmed)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ValidationScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        boot(driver, ctx).await?;
        ensure!(
            ctx.bridge.show("registration").await?,
            "bridge rejected the registration page"
        );

        ctx.bridge.fill("name", "A").await?;
        ctx.bridge.fill("email", "a@b.co").await?;
        ctx.bridge.fill("phone", "1234567890").await?;
        ctx.bridge.fill("status", "single").await?;
        ctx.bridge.submit().await?;
        tokio::time::sleep(Duration::from_millis(300)).await;

        let state = ctx.bridge.state().await?;
        ensure!(
            state.page.as_deref() == Some("registration"),
            "invalid form left the page: {:?}",
            state.page
        );
        ensure!(
            state.field_errors == vec!["name-error".to_string()],
            "expected only the name error, got {:?}",
            state.field_errors
        );
        ensure!(!state.submitting, "an invalid form must not start a request");

        let message = driver.find(By::Id("name-error")).await?.text().await?;
        ensure!(
            message.trim() == FieldError::NameTooShort.to_string(),
            "name error reads {message:?}"
        );
        if ctx.verbose {
            println!("  ⌨️  Invalid name rejected inline: {message}");
        }
        Ok(())
    }
}

impl CombinedScenario for ValidationScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Form Validation", Self::plan()))
    }
}

fn one_bad_field(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let report = validate_form(&draft("A", "a@b.co", "1234567890", Some("single")))
            .err()
            .ok_or_else(|| anyhow!("a one-letter name should fail"))?;
        ensure!(
            report.errors() == [FieldError::NameTooShort],
            "got {:?}",
            report.errors()
        );

        let mut board = ErrorBoard::default();
        board.apply_report(&report);
        ensure!(
            board.message(ErrorSlot::Field(Field::Name)) == Some("Name must be at least 2 characters"),
            "name message missing"
        );
        for field in [Field::Email, Field::Phone, Field::Status] {
            ensure!(
                board.message(ErrorSlot::Field(field)).is_none(),
                "{field:?} should stay clear"
            );
        }
        Ok(())
    })
}

fn empty_form(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let report = validate_form(&RegistrationDraft::default())
            .err()
            .ok_or_else(|| anyhow!("an empty form should fail"))?;
        ensure!(
            report.errors()
                == [
                    FieldError::NameMissing,
                    FieldError::EmailMissing,
                    FieldError::PhoneMissing,
                    FieldError::StatusMissing,
                ],
            "got {:?}",
            report.errors()
        );
        let bad_phone = validate_form(&draft("Asha", "asha@x.in", "12345", Some("couple")))
            .err()
            .and_then(|report| report.error_for(Field::Phone));
        ensure!(
            bad_phone == Some(FieldError::PhoneMalformed),
            "short phone gave {bad_phone:?}"
        );
        Ok(())
    })
}

fn payload_is_trimmed(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let input = validate_form(&draft(
            "  Asha Rao ",
            " asha@example.com ",
            " (987) 654-3210 ",
            Some("couple"),
        ))
        .map_err(|report| anyhow!("valid form rejected: {:?}", report.errors()))?;
        ensure!(input.name == "Asha Rao", "name {:?}", input.name);
        ensure!(input.email == "asha@example.com", "email {:?}", input.email);
        ensure!(input.phone == "(987) 654-3210", "phone {:?}", input.phone);
        ensure!(input.status == AttendeeStatus::Couple, "status {:?}", input.status);
        Ok(())
    })
}

// Registration round trip

pub fn round_trip_scenario() -> LogicOnlyScenario {
    LogicOnlyScenario::new(
        "Registration Round Trip",
        LogicPlan::new()
            .with_check("created response registers", created_registers)
            .with_check("duplicate email is shown", duplicate_email)
            .with_check("non-json error uses the status", non_json_error)
            .with_check("non-json success is malformed", non_json_success)
            .with_check("unreachable backend is a network error", unreachable_backend)
            .with_check("invalid form sends nothing", invalid_form_sends_nothing),
    )
}

fn created_registers(ctx: LogicCtx) -> CheckFuture {
    Box::pin(async move {
        let desk = desk(
            ScriptedTransport::new().reply(201, r#"{"id":"abc"}"#),
            ctx.timeout_ms,
        );
        let outcome = desk.submit(&valid_draft("couple")).await;
        let SubmitOutcome::Registered { status, ack } = &outcome else {
            anyhow::bail!("expected registration, got {outcome:?}");
        };
        ensure!(*status == AttendeeStatus::Couple, "status {status:?}");
        ensure!(ack.id() == Some("abc"), "ack {ack:?}");

        let mut session = SessionState::default();
        ensure!(outcome.record_into(&mut session), "session not updated");
        ensure!(
            session.price().map(|p| p.to_string()).as_deref() == Some("₹1400"),
            "couple price is {:?}",
            session.price()
        );

        let transport = desk.client().transport();
        ensure!(transport.calls() == 1, "{} requests sent", transport.calls());
        let request = transport
            .last_request()
            .ok_or_else(|| anyhow!("no request recorded"))?;
        ensure!(request.url.ends_with("/register"), "url {}", request.url);
        ensure!(request.content_type == "application/json", "content type");
        let body: serde_json::Value = serde_json::from_str(&request.body)?;
        ensure!(body["status"] == "couple", "body {body}");
        ensure!(body["phone"] == "98765 43210", "body {body}");
        Ok(())
    })
}

fn duplicate_email(ctx: LogicCtx) -> CheckFuture {
    Box::pin(async move {
        let desk = desk(
            ScriptedTransport::new().reply(400, r#"{"error":"duplicate email"}"#),
            ctx.timeout_ms,
        );
        let outcome = desk.submit(&valid_draft("single")).await;
        let err = failed_with(&outcome)?;
        ensure!(
            matches!(err, RegistrationError::Server { status: 400, .. }),
            "got {err:?}"
        );
        ensure!(err.category() == ErrorCategory::Server, "category");

        let mut board = ErrorBoard::default();
        outcome.present(&mut board);
        ensure!(
            board.message(ErrorSlot::General) == Some("duplicate email"),
            "banner shows {:?}",
            board.message(ErrorSlot::General)
        );

        let mut session = SessionState::default();
        ensure!(!outcome.record_into(&mut session), "failure recorded a status");
        ensure!(!desk.is_submitting(), "form left disabled after failure");
        Ok(())
    })
}

fn non_json_error(ctx: LogicCtx) -> CheckFuture {
    Box::pin(async move {
        let desk = desk(
            ScriptedTransport::new().reply(500, "Internal Server Error"),
            ctx.timeout_ms,
        );
        let outcome = desk.submit(&valid_draft("single")).await;
        let err = failed_with(&outcome)?;
        ensure!(
            err.to_string() == "HTTP error! status: 500",
            "message {err}"
        );
        Ok(())
    })
}

fn non_json_success(ctx: LogicCtx) -> CheckFuture {
    Box::pin(async move {
        let desk = desk(
            ScriptedTransport::new().reply(200, "<html>ok</html>"),
            ctx.timeout_ms,
        );
        let outcome = desk.submit(&valid_draft("single")).await;
        let err = failed_with(&outcome)?;
        ensure!(
            matches!(err, RegistrationError::MalformedResponse { status: 200, .. }),
            "got {err:?}"
        );
        Ok(())
    })
}

fn unreachable_backend(ctx: LogicCtx) -> CheckFuture {
    Box::pin(async move {
        let desk = desk(
            ScriptedTransport::new()
                .fail(TransportFailure::Unreachable("connection refused".to_string())),
            ctx.timeout_ms,
        );
        let outcome = desk.submit(&valid_draft("single")).await;
        let err = failed_with(&outcome)?;
        ensure!(err.category() == ErrorCategory::Network, "category");
        ensure!(
            err.to_string() == "Network error. Please check your connection and try again.",
            "message {err}"
        );
        Ok(())
    })
}

fn invalid_form_sends_nothing(ctx: LogicCtx) -> CheckFuture {
    Box::pin(async move {
        let desk = desk(ScriptedTransport::new(), ctx.timeout_ms);
        let outcome = desk.submit(&draft("", "nope", "12", None)).await;
        ensure!(
            matches!(outcome, SubmitOutcome::Invalid(_)),
            "got {outcome:?}"
        );
        ensure!(
            desk.client().transport().calls() == 0,
            "invalid form reached the backend"
        );
        Ok(())
    })
}

// Timeout

pub fn timeout_scenario() -> LogicOnlyScenario {
    LogicOnlyScenario::new(
        "Request Timeout",
        LogicPlan::new().with_check("stalled backend times out", stalled_backend_times_out),
    )
}

fn stalled_backend_times_out(ctx: LogicCtx) -> CheckFuture {
    Box::pin(async move {
        let desk = desk(TimeoutTransport::new(StalledTransport), ctx.timeout_ms);
        let started = Instant::now();
        let outcome = desk.submit(&valid_draft("single")).await;
        let waited = started.elapsed();

        let err = failed_with(&outcome)?;
        ensure!(*err == RegistrationError::Timeout, "got {err:?}");
        ensure!(err.category() == ErrorCategory::Network, "timeouts display as network errors");
        ensure!(
            err.to_string() == "Request timeout. Please try again.",
            "message {err}"
        );
        ensure!(
            waited >= Duration::from_millis(ctx.timeout_ms),
            "gave up after {waited:?}, before the {}ms timeout",
            ctx.timeout_ms
        );
        ensure!(!desk.is_submitting(), "form left disabled after timeout");
        Ok(())
    })
}

// Single flight

pub fn single_flight_scenario() -> LogicOnlyScenario {
    LogicOnlyScenario::new(
        "Single Flight Submission",
        LogicPlan::new().with_check("second submit while pending is refused", second_submit_refused),
    )
}

fn second_submit_refused(ctx: LogicCtx) -> CheckFuture {
    Box::pin(async move {
        let transport = ScriptedTransport::new()
            .reply(201, r#"{"id":"first"}"#)
            .reply(201, r#"{"id":"second"}"#)
            .with_latency(Duration::from_millis(20));
        let desk = desk(transport, ctx.timeout_ms);
        let form = valid_draft("single");

        let (first, second) = tokio::join!(desk.submit(&form), async {
            tokio::task::yield_now().await;
            let busy = desk.is_submitting();
            (busy, desk.submit(&form).await)
        });
        let (was_busy, second) = second;

        ensure!(first.is_registered(), "first submit got {first:?}");
        ensure!(was_busy, "submit control should be disabled while pending");
        ensure!(
            matches!(second, SubmitOutcome::Busy),
            "overlapping submit got {second:?}"
        );
        ensure!(
            desk.client().transport().calls() == 1,
            "{} requests for one pending submission",
            desk.client().transport().calls()
        );

        let again = desk.submit(&form).await;
        ensure!(again.is_registered(), "submit after completion got {again:?}");
        ensure!(desk.client().transport().calls() == 2, "retry did not reach the backend");
        Ok(())
    })
}

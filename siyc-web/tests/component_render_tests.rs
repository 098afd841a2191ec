use futures::executor::block_on;
use siyc_core::{
    AttendeeStatus, ErrorBoard, ErrorSlot, FieldError, LoadingProgress, PageId,
    RegistrationDraft,
};
use siyc_web::components::countdown::countdown_units;
use siyc_web::components::footer::Footer;
use siyc_web::components::header::{Header, Props as HeaderProps};
use siyc_web::components::loading_screen::{LoadingScreen, LoadingScreenProps};
use siyc_web::components::payment_panel::{PaymentPanel, PaymentPanelProps};
use siyc_web::components::popup::{
    ConfirmationPopup, ConfirmationPopupProps, PaymentSuccess, PaymentSuccessProps,
};
use siyc_web::components::registration_form::{RegistrationForm, RegistrationFormProps};
use yew::{Callback, LocalServerRenderer};

fn form_props(board: ErrorBoard, submitting: bool) -> RegistrationFormProps {
    RegistrationFormProps {
        draft: RegistrationDraft {
            name: "A".into(),
            email: "a@b.co".into(),
            phone: "1234567890".into(),
            status: Some("single".into()),
        },
        board,
        submitting,
        on_input: Callback::noop(),
        on_blur: Callback::noop(),
        on_enter: Callback::noop(),
        on_submit: Callback::noop(),
        on_register_here: Callback::noop(),
    }
}

fn panel_props(status: Option<AttendeeStatus>, enabled: bool) -> PaymentPanelProps {
    PaymentPanelProps {
        price: status.map(AttendeeStatus::price),
        enabled,
        proof_input_key: 0,
        on_proof: Callback::noop(),
        on_complete: Callback::noop(),
    }
}

#[test]
fn header_renders_pills_and_highlight() {
    let props = HeaderProps {
        highlighted: Some(PageId::Faq),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    for page in PageId::nav_pills() {
        assert!(html.contains(&format!("data-page=\"{}\"", page.as_str())));
    }
    assert!(!html.contains("data-page=\"payment\""));
    assert!(html.contains("nav-pill btn btn-ghost active"));
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
}

#[test]
fn header_without_highlight_marks_no_pill() {
    let props = HeaderProps { highlighted: None };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(!html.contains("aria-current"));
}

#[test]
fn loading_screen_exposes_progress_elements() {
    let props = LoadingScreenProps {
        progress: LoadingProgress::new(),
        visible: true,
        fading: false,
    };
    let html = block_on(LocalServerRenderer::<LoadingScreen>::with_props(props).render());
    assert!(html.contains("id=\"loading-screen\""));
    assert!(html.contains("id=\"loading-bar-fill\""));
    assert!(html.contains("width: 0.00%"));
    assert!(html.contains("id=\"loading-percentage\""));
    assert!(html.contains("0%"));
    assert_eq!(html.matches("class=\"dot\"").count(), 4);
}

#[test]
fn loading_screen_disappears_when_hidden() {
    let props = LoadingScreenProps {
        progress: LoadingProgress::new(),
        visible: false,
        fading: false,
    };
    let html = block_on(LocalServerRenderer::<LoadingScreen>::with_props(props).render());
    assert!(!html.contains("loading-screen"));
}

#[test]
fn registration_form_shows_inline_errors() {
    let mut board = ErrorBoard::default();
    board.show_field(FieldError::NameTooShort);
    let html = block_on(
        LocalServerRenderer::<RegistrationForm>::with_props(form_props(board, false)).render(),
    );
    for id in ["name", "email", "phone", "status-single", "status-couple"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing input {id}");
    }
    assert!(html.contains("id=\"name-error\""));
    assert!(html.contains("Name must be at least 2 characters"));
    assert!(!html.contains("Please enter a valid email"));
    assert!(html.contains("id=\"registration-submit\""));
    assert!(html.contains("id=\"register-here-btn\""));
    assert!(!html.contains("Submitting..."));
}

#[test]
fn registration_form_shows_general_error_and_busy_label() {
    let mut board = ErrorBoard::default();
    board.show(ErrorSlot::General, "duplicate email");
    let html = block_on(
        LocalServerRenderer::<RegistrationForm>::with_props(form_props(board, true)).render(),
    );
    assert!(html.contains("id=\"general-error\""));
    assert!(html.contains("duplicate email"));
    assert!(html.contains("Submitting..."));
}

#[test]
fn payment_panel_shows_price_for_last_status() {
    let props = panel_props(Some(AttendeeStatus::Couple), true);
    let html = block_on(LocalServerRenderer::<PaymentPanel>::with_props(props).render());
    assert!(html.contains("id=\"price-display\""));
    assert!(html.contains("₹1400"));
    assert!(html.contains("id=\"transaction-proof\""));
    assert!(html.contains("image/jpeg,image/jpg,image/png,image/gif"));
    assert!(html.contains("id=\"complete-payment\""));
    assert!(!html.contains("disabled"));
}

#[test]
fn payment_panel_keeps_default_copy_and_disables_completion() {
    let html = block_on(
        LocalServerRenderer::<PaymentPanel>::with_props(panel_props(None, false)).render(),
    );
    assert!(html.contains("See registration"));
    assert!(!html.contains("₹"));
    assert!(html.contains("disabled"));
}

#[test]
fn popups_toggle_with_open_flag() {
    let open = block_on(
        LocalServerRenderer::<ConfirmationPopup>::with_props(ConfirmationPopupProps { open: true })
            .render(),
    );
    assert!(open.contains("id=\"success-popup\""));
    assert!(open.contains("modal-open"));

    let closed = block_on(
        LocalServerRenderer::<ConfirmationPopup>::with_props(ConfirmationPopupProps {
            open: false,
        })
        .render(),
    );
    assert!(closed.contains("id=\"success-popup\""));
    assert!(!closed.contains("modal-open"));

    let paid = block_on(
        LocalServerRenderer::<PaymentSuccess>::with_props(PaymentSuccessProps {
            open: true,
            status: Some(AttendeeStatus::Single),
        })
        .render(),
    );
    assert!(paid.contains("id=\"payment-success\""));
    assert!(paid.contains("single registration confirmed"));
}

#[test]
fn countdown_units_are_padded_and_addressable() {
    let left = siyc_core::countdown::remaining_until(101 * 3_600_000 + 2 * 60_000 + 3_000, 0);
    let units = countdown_units(left);
    let ids: Vec<&str> = units.iter().map(|unit| unit.id.as_str()).collect();
    assert_eq!(ids, ["hours", "minutes", "seconds"]);
    let values: Vec<&str> = units.iter().map(|unit| unit.value.as_str()).collect();
    assert_eq!(values, ["101", "02", "03"]);
}

#[test]
fn footer_renders_copy() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("All rights reserved"));
}

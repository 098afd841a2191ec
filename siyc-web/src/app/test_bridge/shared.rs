use crate::app::state::AppState;
use serde::Serialize;
use siyc_core::{
    AttendeeStatus, ErrorBoard, ErrorSlot, PageId, PageNavigator, PaymentGate, SessionState,
};

/// State exposed to browser automation as `window.__siycTest.state()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BridgeSnapshot {
    pub page: Option<PageId>,
    pub last_status: Option<AttendeeStatus>,
    pub price: Option<String>,
    pub submitting: bool,
    pub payment_enabled: bool,
    pub general_error: Option<String>,
    pub field_errors: Vec<String>,
}

impl BridgeSnapshot {
    pub(super) fn capture(
        navigator: &PageNavigator,
        session: &SessionState,
        board: &ErrorBoard,
        gate: &PaymentGate,
        submitting: bool,
    ) -> Self {
        Self {
            page: navigator.active(),
            last_status: session.last_status(),
            price: session.price().map(|price| price.to_string()),
            submitting,
            payment_enabled: gate.is_enabled(),
            general_error: board.message(ErrorSlot::General).map(str::to_string),
            field_errors: board
                .iter()
                .filter(|(slot, _)| matches!(slot, ErrorSlot::Field(_)))
                .map(|(slot, _)| slot.element_id())
                .collect(),
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub(super) fn from_state(state: &AppState) -> Self {
        Self::capture(
            &state.navigator.current(),
            &state.session.current(),
            &state.board.current(),
            &state.payment.current(),
            state.desk.is_submitting(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siyc_core::{Field, FieldError, PaymentProof};

    #[test]
    fn snapshot_reflects_registration_and_payment() {
        let navigator = PageNavigator::with_active(PageId::Payment);
        let mut session = SessionState::default();
        session.record_registration(AttendeeStatus::Couple);
        let mut board = ErrorBoard::default();
        board.show_field(FieldError::PhoneMalformed);
        let mut gate = PaymentGate::default();
        gate.attach(PaymentProof::new("image/png", 1024))
            .expect("small png is accepted");

        let snapshot = BridgeSnapshot::capture(&navigator, &session, &board, &gate, false);
        assert_eq!(snapshot.page, Some(PageId::Payment));
        assert_eq!(snapshot.last_status, Some(AttendeeStatus::Couple));
        assert_eq!(snapshot.price.as_deref(), Some("₹1400"));
        assert!(snapshot.payment_enabled);
        assert_eq!(snapshot.field_errors, vec![ErrorSlot::Field(Field::Phone).element_id()]);
        assert_eq!(snapshot.general_error, None);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let snapshot = BridgeSnapshot::capture(
            &PageNavigator::new(),
            &SessionState::default(),
            &ErrorBoard::default(),
            &PaymentGate::default(),
            true,
        );
        let json = serde_json::to_value(&snapshot).expect("snapshot serializes");
        assert_eq!(json["page"], serde_json::Value::Null);
        assert_eq!(json["submitting"], true);
        assert_eq!(json["paymentEnabled"], false);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registration tier chosen with the status radio buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendeeStatus {
    Single,
    Couple,
}

impl AttendeeStatus {
    pub const ALL: [Self; 2] = [Self::Single, Self::Couple];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Couple => "couple",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == raw.trim())
    }

    /// Ticket price in whole rupees.
    #[must_use]
    pub const fn price_inr(self) -> u32 {
        match self {
            Self::Single => 799,
            Self::Couple => 1400,
        }
    }

    #[must_use]
    pub const fn price(self) -> Price {
        Price {
            rupees: self.price_inr(),
        }
    }
}

impl fmt::Display for AttendeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Price {
    pub rupees: u32,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.rupees)
    }
}

/// In-memory record of the latest successful registration for this tab.
///
/// Lives only as long as the page; a reload starts from [`SessionState::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    last_status: Option<AttendeeStatus>,
}

impl SessionState {
    pub fn record_registration(&mut self, status: AttendeeStatus) {
        log::debug!("session: registration recorded as {status}");
        self.last_status = Some(status);
    }

    #[must_use]
    pub const fn last_status(&self) -> Option<AttendeeStatus> {
        self.last_status
    }

    /// Price shown on the payment page, if a registration has completed.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.last_status.map(AttendeeStatus::price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        assert_eq!(AttendeeStatus::parse("single"), Some(AttendeeStatus::Single));
        assert_eq!(AttendeeStatus::parse(" couple "), Some(AttendeeStatus::Couple));
        assert_eq!(AttendeeStatus::parse("Single"), None);
        assert_eq!(AttendeeStatus::parse(""), None);
    }

    #[test]
    fn price_follows_last_status() {
        let mut session = SessionState::default();
        assert_eq!(session.price(), None);
        session.record_registration(AttendeeStatus::Single);
        assert_eq!(session.price().map(|p| p.to_string()), Some("₹799".into()));
        session.record_registration(AttendeeStatus::Couple);
        assert_eq!(session.last_status(), Some(AttendeeStatus::Couple));
        assert_eq!(session.price().map(|p| p.to_string()), Some("₹1400".into()));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&AttendeeStatus::Couple).unwrap();
        assert_eq!(json, "\"couple\"");
    }
}

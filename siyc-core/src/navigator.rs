//! Page selection for the single-page layout.
//!
//! Exactly one page is active once the loading screen hands over; before that nothing is.
//! Every transition goes through [`PageNavigator::show`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Home,
    Activities,
    Faq,
    Registration,
    Payment,
}

impl PageId {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Activities,
        Self::Faq,
        Self::Registration,
        Self::Payment,
    ];

    /// Identifier used for the section's DOM id and `data-page` targets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Activities => "activities",
            Self::Faq => "faq",
            Self::Registration => "registration",
            Self::Payment => "payment",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.as_str() == raw)
    }

    /// The payment page is reached only through the registration flow.
    #[must_use]
    pub const fn has_nav_pill(self) -> bool {
        !matches!(self, Self::Payment)
    }

    pub fn nav_pills() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|page| page.has_nav_pill())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no page name provided")]
    MissingTarget,
    #[error("page element not found: {0}")]
    UnknownPage(String),
}

/// Side effects the host must run after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    ScrollToTop,
    /// Refresh the payment page (price display) from the session.
    EnterPayment,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<PageId>,
    pub to: PageId,
    pub effects: Vec<NavEffect>,
}

impl Transition {
    #[must_use]
    pub fn enters_payment(&self) -> bool {
        self.effects.contains(&NavEffect::EnterPayment)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageNavigator {
    active: Option<PageId>,
}

impl PageNavigator {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    #[must_use]
    pub const fn with_active(page: PageId) -> Self {
        Self { active: Some(page) }
    }

    #[must_use]
    pub const fn active(&self) -> Option<PageId> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, page: PageId) -> bool {
        self.active == Some(page)
    }

    /// Nav pill carrying the highlight, if the active page has one.
    #[must_use]
    pub fn highlighted(&self) -> Option<PageId> {
        self.active.filter(|page| page.has_nav_pill())
    }

    /// Activate the page named by a `data-page` value.
    ///
    /// # Errors
    ///
    /// Unknown or blank targets leave the current page active and are logged.
    /// Ids match exactly, so padded names are unknown.
    pub fn show(&mut self, target: &str) -> Result<Transition, NavigationError> {
        if target.trim().is_empty() {
            log::error!("navigation: no page name provided");
            return Err(NavigationError::MissingTarget);
        }
        let Some(page) = PageId::parse(target) else {
            log::error!(
                "navigation: page element not found: {target} (available: {})",
                PageId::ALL.map(PageId::as_str).join(", ")
            );
            return Err(NavigationError::UnknownPage(target.to_string()));
        };
        Ok(self.show_page(page))
    }

    pub fn show_page(&mut self, page: PageId) -> Transition {
        let from = self.active.replace(page);
        let mut effects = vec![NavEffect::ScrollToTop];
        if page == PageId::Payment {
            effects.push(NavEffect::EnterPayment);
        }
        log::debug!("navigation: page_view {page} (from {from:?})");
        Transition {
            from,
            to: page,
            effects,
        }
    }

    pub fn visibility(&self) -> impl Iterator<Item = (PageId, bool)> + '_ {
        PageId::ALL
            .into_iter()
            .map(move |page| (page, self.is_active(page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(nav: &PageNavigator) -> usize {
        nav.visibility().filter(|(_, active)| *active).count()
    }

    #[test]
    fn starts_with_nothing_active() {
        let nav = PageNavigator::new();
        assert_eq!(nav.active(), None);
        assert_eq!(active_count(&nav), 0);
        assert_eq!(nav.highlighted(), None);
    }

    #[test]
    fn show_activates_exactly_one_page() {
        let mut nav = PageNavigator::new();
        let transition = nav.show("faq").unwrap();
        assert_eq!(transition.from, None);
        assert_eq!(transition.to, PageId::Faq);
        assert_eq!(active_count(&nav), 1);
        assert_eq!(nav.highlighted(), Some(PageId::Faq));
    }

    #[test]
    fn repeated_show_is_idempotent() {
        let mut nav = PageNavigator::with_active(PageId::Home);
        nav.show("registration").unwrap();
        let again = nav.show("registration").unwrap();
        assert_eq!(again.from, Some(PageId::Registration));
        assert_eq!(nav.active(), Some(PageId::Registration));
        assert_eq!(active_count(&nav), 1);
        assert_eq!(nav.highlighted(), Some(PageId::Registration));
    }

    #[test]
    fn unknown_target_keeps_current_page() {
        let mut nav = PageNavigator::with_active(PageId::Activities);
        assert_eq!(
            nav.show("pricing"),
            Err(NavigationError::UnknownPage("pricing".into()))
        );
        assert_eq!(nav.show("  "), Err(NavigationError::MissingTarget));
        assert_eq!(nav.active(), Some(PageId::Activities));
    }

    #[test]
    fn padded_target_is_not_a_page() {
        let mut nav = PageNavigator::with_active(PageId::Home);
        assert_eq!(
            nav.show(" faq "),
            Err(NavigationError::UnknownPage(" faq ".into()))
        );
        assert_eq!(nav.show("FAQ"), Err(NavigationError::UnknownPage("FAQ".into())));
        assert_eq!(nav.active(), Some(PageId::Home));
    }

    #[test]
    fn entering_payment_requests_price_refresh() {
        let mut nav = PageNavigator::with_active(PageId::Registration);
        let transition = nav.show("payment").unwrap();
        assert!(transition.enters_payment());
        assert_eq!(nav.highlighted(), None);
        let home = nav.show("home").unwrap();
        assert!(!home.enters_payment());
        assert_eq!(home.effects, vec![NavEffect::ScrollToTop]);
    }

    #[test]
    fn payment_has_no_pill() {
        let pills: Vec<_> = PageId::nav_pills().collect();
        assert_eq!(pills.len(), 4);
        assert!(!pills.contains(&PageId::Payment));
    }
}

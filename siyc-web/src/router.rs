use siyc_core::navigator::PageId;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/activities")]
    Activities,
    #[at("/faq")]
    Faq,
    #[at("/registration")]
    Registration,
    #[at("/payment")]
    Payment,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_page(page: PageId) -> Self {
        match page {
            PageId::Home => Self::Home,
            PageId::Activities => Self::Activities,
            PageId::Faq => Self::Faq,
            PageId::Registration => Self::Registration,
            PageId::Payment => Self::Payment,
        }
    }

    /// Page shown for this path; the not-found route keeps the current page.
    #[must_use]
    pub const fn to_page(self) -> Option<PageId> {
        match self {
            Self::Home => Some(PageId::Home),
            Self::Activities => Some(PageId::Activities),
            Self::Faq => Some(PageId::Faq),
            Self::Registration => Some(PageId::Registration),
            Self::Payment => Some(PageId::Payment),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::page_path;

    #[test]
    fn every_page_round_trips() {
        for page in PageId::ALL {
            let route = Route::from_page(page);
            assert_eq!(route.to_page(), Some(page));
            assert_eq!(route.to_path(), page_path(page));
        }
        assert_eq!(Route::NotFound.to_page(), None);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/faq"), Some(Route::Faq));
    }
}

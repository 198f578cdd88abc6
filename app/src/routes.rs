//! The route table: every page the site serves, as one closed enum.

/// A registered page.
///
/// The set of pages is closed and small, so the table is a plain enum plus
/// `const` lookup methods; the `<Routes>` block in [`crate::App`] registers
/// the same six paths in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    ChapterIndex,
    Chapter1,
    Chapter2,
    Chapter3,
    Chapter4,
}

impl Page {
    /// Every registered page, in display order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::ChapterIndex,
        Page::Chapter1,
        Page::Chapter2,
        Page::Chapter3,
        Page::Chapter4,
    ];

    /// The URL path this page is served under.
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::ChapterIndex => "/chapters",
            Page::Chapter1 => "/chapter-1",
            Page::Chapter2 => "/chapter-2",
            Page::Chapter3 => "/chapter-3",
            Page::Chapter4 => "/chapter-4",
        }
    }

    /// Label used for links pointing at this page.
    pub const fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ChapterIndex => "Chapters",
            Page::Chapter1 => "Chapter 1",
            Page::Chapter2 => "Chapter 2",
            Page::Chapter3 => "Chapter 3",
            Page::Chapter4 => "Chapter 4",
        }
    }

    /// Look up the page registered for `path`.
    ///
    /// Matching is exact (no trailing-slash normalization); anything
    /// unregistered returns `None` and ends up on the not-found page.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// Pages linked from the navigation bar: the top-level routes.
pub const NAV_PAGES: [Page; 2] = [Page::Home, Page::ChapterIndex];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_round_trips_through_its_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_paths_are_unique() {
        for (i, page) in Page::ALL.into_iter().enumerate() {
            for other in &Page::ALL[..i] {
                assert_ne!(page.path(), other.path());
            }
        }
    }

    #[test]
    fn test_unregistered_paths_do_not_match() {
        assert_eq!(Page::from_path("/chapter-5"), None);
        assert_eq!(Page::from_path("/about"), None);
        assert_eq!(Page::from_path(""), None);
        // Exact matching: no trailing-slash or fragment forgiveness.
        assert_eq!(Page::from_path("/chapters/"), None);
        assert_eq!(Page::from_path("chapters"), None);
    }

    #[test]
    fn test_nav_pages_are_registered() {
        for page in NAV_PAGES {
            assert!(Page::ALL.contains(&page));
        }
    }
}

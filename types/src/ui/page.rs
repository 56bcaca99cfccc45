//! The page router's state space.

/// One navigable page; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Skills,
        Page::Contact,
    ];

    /// Nav-bar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Work",
            Page::Skills => "Skills",
            Page::Contact => "Contact",
        }
    }

    /// Section heading rendered at the top of the page body.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::About => "ABOUT ME",
            Page::Projects => "PROJECTS",
            Page::Skills => "TECHNICAL CAPABILITIES",
            Page::Contact => "ESTABLISH CONNECTION",
        }
    }

    /// The next page in navigation order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Page::Home => Page::About,
            Page::About => Page::Projects,
            Page::Projects => Page::Skills,
            Page::Skills => Page::Contact,
            Page::Contact => Page::Home,
        }
    }

    /// The previous page in navigation order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Page::Home => Page::Contact,
            Page::About => Page::Home,
            Page::Projects => Page::About,
            Page::Skills => Page::Projects,
            Page::Contact => Page::Skills,
        }
    }

    /// Map a number-row key (1..=5) to a page.
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Page::Home),
            '2' => Some(Page::About),
            '3' => Some(Page::Projects),
            '4' => Some(Page::Skills),
            '5' => Some(Page::Contact),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_are_inverse() {
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
            assert_eq!(page.prev().next(), page);
        }
    }

    #[test]
    fn next_cycles_through_all_pages() {
        let mut page = Page::Home;
        let mut seen = Vec::new();
        for _ in 0..Page::ALL.len() {
            seen.push(page);
            page = page.next();
        }
        assert_eq!(page, Page::Home);
        assert_eq!(seen, Page::ALL);
    }

    #[test]
    fn digits_map_in_nav_order() {
        assert_eq!(Page::from_digit('1'), Some(Page::Home));
        assert_eq!(Page::from_digit('5'), Some(Page::Contact));
        assert_eq!(Page::from_digit('6'), None);
        assert_eq!(Page::from_digit('a'), None);
    }
}

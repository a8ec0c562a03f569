use std::fmt;

use tracing::trace;

use crate::task::Task;

/// Filter selecting which tasks render. Persisted as its 1-based
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    All = 1,
    Active = 2,
    Completed = 3,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::All, Page::Active, Page::Completed];

    pub fn position(self) -> u8 {
        self as u8
    }

    pub fn from_position(position: u8) -> Option<Self> {
        match position {
            1 => Some(Page::All),
            2 => Some(Page::Active),
            3 => Some(Page::Completed),
            _ => None,
        }
    }

    /// Coerces stored or user-supplied text to a page. Anything that is
    /// not a finite integral number in `1..=3` falls back to `All`.
    pub fn coerce(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Page::All;
        };

        let page = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && value.fract() == 0.0)
            .filter(|value| (1.0..=3.0).contains(value))
            .and_then(|value| Self::from_position(value as u8));

        match page {
            Some(page) => page,
            None => {
                trace!(raw, "page input not a valid position; defaulting to all");
                Page::All
            }
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Page::All => true,
            Page::Active => !task.complete,
            Page::Completed => task.complete,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::All => "All",
            Page::Active => "Active",
            Page::Completed => "Completed",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

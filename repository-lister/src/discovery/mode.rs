//! Owner kind detection state.

use std::fmt;

/// Which listing endpoint discovery is currently using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerMode {
    /// `GET /orgs/{owner}/repos`. Every run starts here.
    #[default]
    Organization,

    /// `GET /users/{owner}/repos`. Terminal: never switches back.
    User,
}

impl OwnerMode {
    /// Returns the mode to retry with after a "not found", if any.
    #[must_use]
    pub fn fallback(self) -> Option<Self> {
        match self {
            Self::Organization => Some(Self::User),
            Self::User => None,
        }
    }

    /// Returns the mode as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::User => "user",
        }
    }
}

impl fmt::Display for OwnerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of the pagination loop: endpoint plus page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    mode: OwnerMode,
    page: u32,
    attempted: bool,
}

impl PageCursor {
    /// Starts in organization mode at `start_page`.
    #[must_use]
    pub fn new(start_page: u32) -> Self {
        Self {
            mode: OwnerMode::Organization,
            page: start_page,
            attempted: false,
        }
    }

    /// Current endpoint.
    #[must_use]
    pub fn mode(&self) -> OwnerMode {
        self.mode
    }

    /// Current page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Marks that a request at the current position returned a response.
    pub fn record_response(&mut self) {
        self.attempted = true;
    }

    /// Moves to the next page of the same endpoint.
    pub fn advance(&mut self) {
        self.page += 1;
    }

    /// Handles a "not found" response.
    ///
    /// Only the very first request of a run may fall back, and only from
    /// organization to user mode. Falling back restarts at page 1. Returns
    /// false if the error must be treated as fatal.
    pub fn fall_back(&mut self) -> bool {
        if self.attempted {
            return false;
        }
        match self.mode.fallback() {
            Some(mode) => {
                self.mode = mode;
                self.page = 1;
                self.attempted = true;
                true
            }
            None => false,
        }
    }
}

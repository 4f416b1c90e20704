/// Status of a data-driven view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one fetch issued by a [`ViewLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Outcome of handing a finished fetch back to a [`ViewLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// The result was the latest one and is now the view state
    Applied,
    /// A newer fetch started after this one; the result was dropped
    Stale,
}

/// View state plus the bookkeeping that keeps an old response from
/// overwriting a newer one.
///
/// Every `begin` resets the state to `Loading` and hands out a new ticket.
/// Only the result carrying the most recent ticket is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLoader<T> {
    generation: u64,
    state: ViewState<T>,
}

impl<T> Default for ViewLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewLoader<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Start a new fetch. Any fetch still in flight becomes stale.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn finish(&mut self, ticket: FetchTicket, state: ViewState<T>) -> FinishOutcome {
        if !self.is_current(ticket) {
            return FinishOutcome::Stale;
        }
        self.state = state;
        FinishOutcome::Applied
    }
}

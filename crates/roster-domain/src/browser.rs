//! The single owner of the character list state.
//!
//! `Browser` never performs I/O. Every event goes through [`Browser::dispatch`],
//! which mutates state and returns the [`Effect`]s the runtime must carry out:
//! arm a debounce timer or perform a fetch. Results come back as
//! [`Msg::FetchSettled`] and [`Msg::DebounceElapsed`].

use crate::{
    Character, CharacterPage, CharacterQuery, DebounceToken, Debouncer, FetchMode, FetchRequest,
    PageCursor, ViewState,
};
use chrono::{DateTime, Utc};
use roster_core::RosterResult;
use std::time::Duration;

/// Events that drive the list.
#[derive(Debug)]
pub enum Msg {
    /// Session start: load the first page.
    Start,
    /// The search text changed.
    SearchChanged(String),
    /// A debounce timer expired.
    DebounceElapsed(DebounceToken),
    /// The visible end of the list came within the proximity threshold.
    LoadMore,
    /// Reload control.
    Reload,
    /// Pull-to-refresh gesture.
    Refresh,
    /// Retry control on the error screen.
    Retry,
    /// A fetch finished.
    FetchSettled {
        request: FetchRequest,
        outcome: RosterResult<CharacterPage>,
    },
}

/// Work the runtime performs on behalf of the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `Msg::DebounceElapsed(token)` after `delay`.
    ScheduleDebounce { token: DebounceToken, delay: Duration },
    /// Perform the request and send back `Msg::FetchSettled`.
    Fetch(FetchRequest),
}

#[derive(Debug)]
pub struct Browser {
    search_text: String,
    items: Vec<Character>,
    loading: bool,
    refreshing: bool,
    error: Option<String>,
    cursor: PageCursor,
    debouncer: Debouncer,
    debounce: Duration,
    generation: u64,
    ever_loaded: bool,
    last_loaded_at: Option<DateTime<Utc>>,
    /// Highest page merged into `items` in the current generation; 0 if none.
    loaded_page: u32,
}

impl Browser {
    pub fn new(debounce: Duration) -> Self {
        Self {
            search_text: String::new(),
            items: Vec::new(),
            loading: true,
            refreshing: false,
            error: None,
            cursor: PageCursor::new(),
            debouncer: Debouncer::new(),
            debounce,
            generation: 0,
            ever_loaded: false,
            last_loaded_at: None,
            loaded_page: 0,
        }
    }

    /// Start with a search text already filled in.
    pub fn with_search(debounce: Duration, search_text: impl Into<String>) -> Self {
        let mut browser = Self::new(debounce);
        browser.search_text = search_text.into();
        browser
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn items(&self) -> &[Character] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.cursor.page()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_fetching_more(&self) -> bool {
        self.cursor.is_fetching_more()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.last_loaded_at
    }

    /// The last page whose results are actually displayed. Unlike
    /// [`Browser::page`], this never reflects a request still in flight.
    pub fn loaded_page(&self) -> u32 {
        self.loaded_page
    }

    pub fn view(&self) -> ViewState {
        ViewState::derive(
            self.ever_loaded,
            !self.items.is_empty(),
            self.loading,
            self.error.is_some(),
        )
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Start => vec![Effect::Fetch(self.fetch_characters(true))],
            Msg::SearchChanged(text) => self
                .set_search_text(text)
                .map(|token| Effect::ScheduleDebounce {
                    token,
                    delay: self.debounce,
                })
                .into_iter()
                .collect(),
            Msg::DebounceElapsed(token) => self
                .debounce_elapsed(token)
                .map(Effect::Fetch)
                .into_iter()
                .collect(),
            Msg::LoadMore => self.load_more().map(Effect::Fetch).into_iter().collect(),
            Msg::Reload | Msg::Retry => vec![Effect::Fetch(self.fetch_characters(true))],
            Msg::Refresh => vec![Effect::Fetch(self.refresh())],
            Msg::FetchSettled { request, outcome } => {
                self.apply(&request, outcome);
                Vec::new()
            }
        }
    }

    /// Record new search text and arm the quiet-period timer.
    ///
    /// Returns `None` when the text is unchanged.
    pub fn set_search_text(&mut self, text: String) -> Option<DebounceToken> {
        if text == self.search_text {
            return None;
        }
        self.search_text = text;
        Some(self.debouncer.restart())
    }

    /// A debounce timer expired. Only the latest armed token triggers a reset.
    pub fn debounce_elapsed(&mut self, token: DebounceToken) -> Option<FetchRequest> {
        if !self.debouncer.fire(token) {
            tracing::trace!("Ignoring superseded debounce token {:?}", token);
            return None;
        }
        tracing::debug!("Search settled on {:?}", self.search_text);
        Some(self.fetch_characters(true))
    }

    /// Claim the next page for an append fetch.
    ///
    /// A no-op while an append or reset is outstanding, before anything is
    /// displayed, or after the last page.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if self.loading || self.items.is_empty() {
            return None;
        }
        let page = self.cursor.try_advance()?;
        tracing::debug!("Loading page {} for {:?}", page, self.search_text);
        Some(self.fetch_characters(false))
    }

    /// Pull-to-refresh: a reset fetch with the refreshing indicator set.
    pub fn refresh(&mut self) -> FetchRequest {
        self.refreshing = true;
        self.fetch_characters(true)
    }

    /// Build the request for a reset (page 1) or the current page.
    ///
    /// A reset starts a new generation, clears the items and the pagination
    /// state, and consumes any pending debounce since it already uses the
    /// latest text.
    pub fn fetch_characters(&mut self, reset: bool) -> FetchRequest {
        let mode = if reset {
            self.generation += 1;
            self.cursor.reset();
            self.items.clear();
            self.loaded_page = 0;
            self.loading = true;
            self.debouncer.cancel();
            FetchMode::Replace
        } else {
            FetchMode::Append
        };

        FetchRequest {
            generation: self.generation,
            mode,
            query: CharacterQuery::new(self.cursor.page(), self.search_text.clone()),
        }
    }

    /// Merge a settled fetch. Returns `false` if the reply was stale and dropped.
    pub fn apply(&mut self, request: &FetchRequest, outcome: RosterResult<CharacterPage>) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                "Discarding stale reply for page {} (generation {} < {})",
                request.query.page,
                request.generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(page) => {
                let has_next = page.has_next();
                match request.mode {
                    FetchMode::Replace => self.items = page.results,
                    FetchMode::Append => self.items.extend(page.results),
                }
                self.cursor.set_has_more(has_next);
                self.error = None;
                self.last_loaded_at = Some(Utc::now());
                self.loaded_page = request.query.page;
                self.ever_loaded = true;
                tracing::debug!(
                    "Page {} loaded, {} characters displayed",
                    request.query.page,
                    self.items.len()
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Fetching page {} for {:?} failed: {}",
                    request.query.page,
                    request.query.name,
                    e
                );
                if !request.is_reset() {
                    self.cursor.rollback(request.query.page);
                }
                self.error = Some(e.user_message());
            }
        }

        self.loading = false;
        self.refreshing = false;
        self.cursor.settle();
        true
    }
}

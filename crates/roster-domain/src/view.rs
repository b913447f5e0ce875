/// Which of the three mutually exclusive screens to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing to show yet and a fetch is running.
    InitialLoading,
    /// The fetch failed before anything was ever shown.
    ErrorEmpty,
    /// The list surface. Once reached it is kept for the rest of the session.
    Loaded,
}

impl ViewState {
    /// Derive the screen from the list flags.
    ///
    /// Loading wins over an error while nothing is displayed, so a retry from
    /// the error screen goes back through the spinner.
    pub fn derive(ever_loaded: bool, has_items: bool, loading: bool, has_error: bool) -> Self {
        if ever_loaded || has_items {
            ViewState::Loaded
        } else if loading {
            ViewState::InitialLoading
        } else if has_error {
            ViewState::ErrorEmpty
        } else {
            // A first page that came back empty still shows the list surface.
            ViewState::Loaded
        }
    }
}

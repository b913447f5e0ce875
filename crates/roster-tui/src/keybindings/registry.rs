use super::{
    grid::GridProvider,
    search_box::SearchBoxProvider,
    status_screens::{ErrorScreenProvider, LoadingScreenProvider},
    KeybindingProvider,
};
use crate::app::{App, Focus};
use roster_domain::ViewState;

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        Self::get_provider_for(app.browser.view(), app.focus)
    }

    pub fn get_provider_for(view: ViewState, focus: Focus) -> Box<dyn KeybindingProvider> {
        match view {
            ViewState::InitialLoading => Box::new(LoadingScreenProvider),
            ViewState::ErrorEmpty => Box::new(ErrorScreenProvider),
            ViewState::Loaded => match focus {
                Focus::Search => Box::new(SearchBoxProvider),
                Focus::Grid => Box::new(GridProvider),
            },
        }
    }
}

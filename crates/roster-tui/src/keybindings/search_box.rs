use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

const BINDINGS: &[Keybinding] = &[
    Keybinding::new("Tab", "grid", KeybindingAction::FocusGrid),
    Keybinding::new("^U", "clear", KeybindingAction::ClearSearch),
    Keybinding::new("^R", "reload", KeybindingAction::Reload),
    Keybinding::new("F5", "refresh", KeybindingAction::Refresh),
    Keybinding::new("^C", "quit", KeybindingAction::Quit),
];

pub struct SearchBoxProvider;

impl KeybindingProvider for SearchBoxProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext {
            name: "Search",
            bindings: BINDINGS,
        }
    }
}

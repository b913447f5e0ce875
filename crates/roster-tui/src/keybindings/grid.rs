use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

const BINDINGS: &[Keybinding] = &[
    Keybinding::new("hjkl", "move", KeybindingAction::NavigateDown),
    Keybinding::new("PgUp/PgDn", "page", KeybindingAction::PageDown),
    Keybinding::new("g/G", "top/bottom", KeybindingAction::JumpToBottom),
    Keybinding::new("/", "search", KeybindingAction::FocusSearch),
    Keybinding::new("r", "reload", KeybindingAction::Reload),
    Keybinding::new("R", "refresh", KeybindingAction::Refresh),
    Keybinding::new("q", "quit", KeybindingAction::Quit),
];

pub struct GridProvider;

impl KeybindingProvider for GridProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext {
            name: "Characters",
            bindings: BINDINGS,
        }
    }
}

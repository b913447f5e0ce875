use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct LoadingScreenProvider;

impl KeybindingProvider for LoadingScreenProvider {
    fn get_context(&self) -> KeybindingContext {
        const BINDINGS: &[Keybinding] = &[Keybinding::new("q", "quit", KeybindingAction::Quit)];
        KeybindingContext {
            name: "Loading",
            bindings: BINDINGS,
        }
    }
}

pub struct ErrorScreenProvider;

impl KeybindingProvider for ErrorScreenProvider {
    fn get_context(&self) -> KeybindingContext {
        const BINDINGS: &[Keybinding] = &[
            Keybinding::new("Enter/r", "try again", KeybindingAction::Retry),
            Keybinding::new("q", "quit", KeybindingAction::Quit),
        ];
        KeybindingContext {
            name: "Error",
            bindings: BINDINGS,
        }
    }
}

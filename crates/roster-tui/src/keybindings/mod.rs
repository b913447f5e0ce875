pub mod grid;
pub mod registry;
pub mod search_box;
pub mod status_screens;

pub use registry::KeybindingRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    NavigateDown,
    NavigateUp,
    NavigateLeft,
    NavigateRight,
    PageDown,
    PageUp,
    JumpToTop,
    JumpToBottom,
    FocusSearch,
    FocusGrid,
    ClearSearch,
    Reload,
    Refresh,
    Retry,
    Quit,
}

/// A key (or key group) and the few words the footer shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keys: &'static str,
    pub hint: &'static str,
    pub action: KeybindingAction,
}

impl Keybinding {
    pub const fn new(keys: &'static str, hint: &'static str, action: KeybindingAction) -> Self {
        Self { keys, hint, action }
    }
}

/// The bindings that apply to whatever currently has focus.
#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: &'static str,
    pub bindings: &'static [Keybinding],
}

impl KeybindingContext {
    /// One-line hint for the footer: `keys hint · keys hint`.
    pub fn footer_hint(&self) -> String {
        self.bindings
            .iter()
            .map(|b| format!("{} {}", b.keys, b.hint))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}

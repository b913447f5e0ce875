pub mod app;
pub mod components;
pub mod effects;
pub mod events;
pub mod grid;
pub mod handlers;
pub mod keybindings;
pub mod theme;
pub mod ui;

pub use app::{App, Focus};
pub use effects::EffectRunner;
pub use grid::GridView;

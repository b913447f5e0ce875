pub mod banner;
pub mod character_card;
pub mod panel;
pub mod spinner;
pub mod status_screen;

pub use banner::{Banner, BannerVariant};
pub use character_card::render_character_card;
pub use panel::{render_panel, PanelConfig};
pub use spinner::Spinner;
pub use status_screen::{centered_rect, render_error_screen, render_loading_screen};

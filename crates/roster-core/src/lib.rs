pub mod config;
pub mod error;
pub mod input;
pub mod pagination;
pub mod result;
pub mod selection;

pub use config::AppConfig;
pub use error::RosterError;
pub use input::InputState;
pub use pagination::{GridPage, GridPageInfo};
pub use result::RosterResult;
pub use selection::GridSelection;

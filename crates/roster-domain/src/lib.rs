pub mod browser;
pub mod character;
pub mod debounce;
pub mod fetch;
pub mod layout;
pub mod paging;
pub mod query;
pub mod source;
pub mod view;

pub use browser::{Browser, Effect, Msg};
pub use character::{Character, CharacterId, CharacterPage, CharacterStatus, ResponseInfo};
pub use debounce::{DebounceToken, Debouncer};
pub use fetch::{FetchMode, FetchRequest};
pub use layout::{grid_columns, logical_width, GridBreakpoints};
pub use paging::PageCursor;
pub use query::CharacterQuery;
pub use source::CharacterSource;
#[cfg(any(test, feature = "testing"))]
pub use source::MockCharacterSource;
pub use view::ViewState;

use crate::{CharacterPage, CharacterQuery};
use async_trait::async_trait;
use roster_core::RosterResult;

/// Where character pages come from.
///
/// Any non-success status or transport failure is reported as an error;
/// callers never see a partial page.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn list(&self, query: &CharacterQuery) -> RosterResult<CharacterPage>;
}

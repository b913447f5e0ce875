use crate::CharacterQuery;

/// How a settled page is merged into the displayed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Replace all items (search change, reload, refresh, retry).
    Replace,
    /// Concatenate onto the existing items (next page).
    Append,
}

/// A fetch the state owner wants performed.
///
/// `generation` ties the request to the reset cycle that issued it; replies
/// from an older generation are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub mode: FetchMode,
    pub query: CharacterQuery,
}

impl FetchRequest {
    pub fn is_reset(&self) -> bool {
        self.mode == FetchMode::Replace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_replace_is_a_reset() {
        let request = |mode| FetchRequest {
            generation: 1,
            mode,
            query: CharacterQuery::new(2, "Rick"),
        };
        assert!(request(FetchMode::Replace).is_reset());
        assert!(!request(FetchMode::Append).is_reset());
    }
}

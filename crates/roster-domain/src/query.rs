use serde::{Deserialize, Serialize};

/// Parameters of one list request: `?page={page}&name={name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterQuery {
    pub page: u32,
    /// Name filter; empty matches every character.
    pub name: String,
}

impl CharacterQuery {
    pub fn new(page: u32, name: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            name: name.into(),
        }
    }

    pub fn first_page(name: impl Into<String>) -> Self {
        Self::new(1, name)
    }

    /// Query-string pairs in the order the endpoint documents them.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [("page", self.page.to_string()), ("name", self.name.clone())]
    }
}

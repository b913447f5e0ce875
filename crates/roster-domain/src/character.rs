use serde::{Deserialize, Serialize};

pub type CharacterId = u32;

/// Life status as reported by the API. Anything unrecognised is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[default]
    Unknown,
}

impl CharacterStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

impl From<String> for CharacterStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Alive" => CharacterStatus::Alive,
            "Dead" => CharacterStatus::Dead,
            _ => CharacterStatus::Unknown,
        }
    }
}

impl From<CharacterStatus> for String {
    fn from(status: CharacterStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character owned by the remote service. The client never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub image: String,
}

/// Pagination metadata that accompanies every list response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of `GET /character/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: ResponseInfo,
    pub results: Vec<Character>,
}

impl CharacterPage {
    pub fn has_next(&self) -> bool {
        self.info.next.is_some()
    }
}

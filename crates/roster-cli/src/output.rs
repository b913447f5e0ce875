use roster_domain::{Character, CharacterPage};
use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct PageResponse {
    pub page: u32,
    pub has_next: bool,
    pub total: u32,
    pub pages: u32,
    pub count: usize,
    pub items: Vec<Character>,
}

impl PageResponse {
    pub fn new(page: u32, result: CharacterPage) -> Self {
        Self {
            page,
            has_next: result.has_next(),
            total: result.info.count,
            pages: result.info.pages,
            count: result.results.len(),
            items: result.results,
        }
    }
}

pub fn output_success<T: Serialize>(data: T) -> anyhow::Result<()> {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// Print an error envelope to stderr and exit with status 1.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", message),
    }
    std::process::exit(1);
}

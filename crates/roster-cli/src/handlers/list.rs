use crate::cli::ListArgs;
use crate::output::{output_error, output_success, PageResponse};
use roster_domain::{CharacterQuery, CharacterSource};

pub async fn handle(source: &dyn CharacterSource, args: ListArgs) -> anyhow::Result<()> {
    let query = CharacterQuery::new(args.page, args.name);
    match source.list(&query).await {
        Ok(result) => output_success(PageResponse::new(query.page, result)),
        Err(e) => {
            tracing::debug!("list page {} failed: {}", query.page, e);
            output_error(&format!("{} ({})", e.user_message(), e))
        }
    }
}

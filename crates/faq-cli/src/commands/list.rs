use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = match limit {
        Some(limit) => {
            let batch = ctx.service.store().find_many(limit).await?;
            ctx.service.attach_author_data(batch).await?
        }
        None => ctx.service.get_all().await?,
    };

    output(
        &json!({
            "count": entries.len(),
            "entries": entries,
        }),
        flags.format,
    )
}

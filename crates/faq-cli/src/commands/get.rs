use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entry = ctx.service.get_by_id(id).await?;

    output(&json!({ "entry": entry }), flags.format)
}

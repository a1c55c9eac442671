use serde_json::json;

use faq_service::CreateFaq;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    question: String,
    answer: String,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = CreateFaq { question, answer };
    let entry = ctx.service.create(ctx.identity.as_ref(), &input).await?;

    output(&json!({ "entry": entry }), flags.format)
}

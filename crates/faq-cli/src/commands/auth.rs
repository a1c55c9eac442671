use serde_json::json;

use faq_auth::{jwks, token_store};
use faq_config::FaqConfig;

use crate::cli::{AuthAction, GlobalFlags};
use crate::output::output;

pub fn handle(action: &AuthAction, flags: &GlobalFlags, _config: &FaqConfig) -> anyhow::Result<()> {
    match action {
        AuthAction::Login { token } => login(token, flags),
        AuthAction::Status => status(flags),
        AuthAction::Logout => logout(flags),
    }
}

fn login(token: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Reject tokens that are already expired before persisting them.
    let expires_at = jwks::decode_expiry(token)?;
    if expires_at <= chrono::Utc::now() {
        anyhow::bail!("token is already expired (exp: {expires_at})");
    }

    token_store::store(token)?;
    output(
        &json!({
            "logged_in": true,
            "expires_at": expires_at.to_rfc3339(),
        }),
        flags.format,
    )
}

fn status(flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = token_store::detect_token_source();
    let expires_at = token_store::load()
        .and_then(|token| jwks::decode_expiry(&token).ok())
        .map(|dt| dt.to_rfc3339());

    output(
        &json!({
            "logged_in": source.is_some(),
            "token_source": source,
            "expires_at": expires_at,
        }),
        flags.format,
    )
}

fn logout(flags: &GlobalFlags) -> anyhow::Result<()> {
    faq_auth::logout()?;
    output(&json!({ "logged_out": true }), flags.format)
}

//! Filtering raw Clerk user records down to client-safe profile data.

use serde::Deserialize;

use faq_core::entities::AuthorProfile;

/// A Clerk user record, deserialized to just the fields we read.
/// Everything else in the API payload is dropped.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ClerkUser {
    pub id: String,
    pub username: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub external_accounts: Vec<ClerkExternalAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ClerkExternalAccount {
    pub username: Option<String>,
}

/// Reduce a raw Clerk user to the public profile fields the client may
/// see. The first linked external account with a username supplies the
/// fallback handle.
pub(crate) fn filter_clerk_user(user: ClerkUser) -> AuthorProfile {
    let external_username = user
        .external_accounts
        .into_iter()
        .find_map(|account| account.username.filter(|u| !u.is_empty()));

    AuthorProfile {
        id: user.id,
        username: user.username.filter(|u| !u.is_empty()),
        external_username,
        image_url: user.image_url,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn parse_user(value: serde_json::Value) -> serde_json::Result<ClerkUser> {
        serde_json::from_value(value)
    }

    #[test]
    fn keeps_primary_username() {
        let user = parse_user(json!({
            "id": "user_a1",
            "username": "alice",
            "image_url": "https://img.clerk.com/a1",
            "external_accounts": [{"username": "alice-gh"}],
        }))
        .unwrap();
        let profile = filter_clerk_user(user);

        assert_eq!(profile.id, "user_a1");
        assert_eq!(profile.username.as_deref(), Some("alice"));
        assert_eq!(profile.external_username.as_deref(), Some("alice-gh"));
        assert_eq!(profile.image_url.as_deref(), Some("https://img.clerk.com/a1"));
    }

    #[test]
    fn empty_username_becomes_none() {
        let user = parse_user(json!({
            "id": "user_b2",
            "username": "",
            "external_accounts": [],
        }))
        .unwrap();
        let profile = filter_clerk_user(user);

        assert!(profile.username.is_none());
        assert!(profile.external_username.is_none());
        assert!(profile.image_url.is_none());
    }

    #[test]
    fn first_external_account_with_username_wins() {
        let user = parse_user(json!({
            "id": "user_c3",
            "username": null,
            "external_accounts": [
                {"username": null},
                {"username": "bob-ext"},
                {"username": "ignored"},
            ],
        }))
        .unwrap();
        let profile = filter_clerk_user(user);

        assert_eq!(profile.external_username.as_deref(), Some("bob-ext"));
    }

    #[test]
    fn record_without_id_is_rejected() {
        assert!(parse_user(json!({"username": "no-id"})).is_err());
    }
}

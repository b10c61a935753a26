use tracing::warn;

use crate::clients::api_client::EventsApi;
use crate::service::session::Session;

pub const PLACEHOLDER_AVATAR: &str =
    "https://upload.wikimedia.org/wikipedia/commons/7/7c/Profile_avatar_placeholder_large.png";

/// Navigation-bar state: who is signed in, their avatar, and where the
/// home link points.
#[derive(Debug, Clone, PartialEq)]
pub struct Navbar {
    pub user_avatar: String,
    pub signed_in: bool,
    pub current_user: Option<String>,
    pub home_link: String,
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Navbar {
    pub fn new() -> Self {
        Self {
            user_avatar: PLACEHOLDER_AVATAR.to_string(),
            signed_in: false,
            current_user: None,
            home_link: "/".to_string(),
        }
    }

    /// Fetches the signed-in user, if any. Anonymous visitors keep the
    /// defaults; a failed lookup is treated the same way.
    pub async fn mount<A: EventsApi + ?Sized>(&mut self, api: &A) {
        match api.current_user().await {
            Ok(Some(user)) => {
                self.user_avatar = user.avatar;
                self.current_user = Some(user.id);
                self.signed_in = true;
                self.home_link = "/dashboard".to_string();
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "could not fetch current user"),
        }
    }

    /// Login buttons remember where to return after the OAuth redirect,
    /// unless an earlier page already recorded a destination.
    pub fn handle_auth_click<S: Session + ?Sized>(&self, session: &mut S, current_path: &str) {
        if session.redirect_path().is_none() {
            session.remember_redirect(current_path);
        }
    }
}

//! Auth context for the console.
//!
//! The bearer token and the serialized user are read from browser local
//! storage ONCE when the app component is created; everything downstream
//! (API client, role guard, header) borrows from the resulting
//! `AuthSession` instead of re-reading storage. `logout` clears both keys
//! and sends the browser to the sign-in screen. Token refresh does not
//! exist; an expired token simply surfaces as backend 401 errors.

use common::model::user::User;
use gloo_console::warn;
use web_sys::Storage;

const TOKEN_KEY: &str = "lms_admin.token";
const USER_KEY: &str = "lms_admin.user";
const LOGIN_PATH: &str = "/login";

#[derive(Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

impl AuthSession {
    /// Builds the session from local storage. `None` when either key is
    /// missing or the stored user does not parse; callers treat that as
    /// "not signed in".
    pub fn load() -> Option<AuthSession> {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw_user = storage.get_item(USER_KEY).ok().flatten()?;
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(AuthSession { token, user }),
            Err(err) => {
                warn!(format!("stored user is unreadable, treating as signed out: {err}"));
                None
            }
        }
    }

    /// True when the signed-in user may enter the admin console at all.
    pub fn is_allowed(&self) -> bool {
        self.user.role.is_admin_role()
    }
}

/// Clears the stored session and navigates to the sign-in screen.
pub fn logout() {
    if let Some(storage) = local_storage() {
        storage.remove_item(TOKEN_KEY).ok();
        storage.remove_item(USER_KEY).ok();
    }
    redirect_to_login();
}

pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        window.location().set_href(LOGIN_PATH).ok();
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

use std::cell::RefCell;

use contracts::system::auth::UserInfo;
use web_sys::window;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Display data cached next to the token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredProfile {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Persistent session slot: one token plus cached display name and email.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn profile(&self) -> StoredProfile;
    fn save_token(&self, token: &str);
    fn save_profile(&self, user: &UserInfo);
    fn clear(&self);

    fn save(&self, token: &str, user: &UserInfo) {
        self.save_token(token);
        self.save_profile(user);
    }
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.is_empty())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

impl SessionStore for BrowserStorage {
    fn token(&self) -> Option<String> {
        read(TOKEN_KEY)
    }

    fn profile(&self) -> StoredProfile {
        StoredProfile {
            name: read(USER_NAME_KEY),
            email: read(USER_EMAIL_KEY),
        }
    }

    fn save_token(&self, token: &str) {
        write(TOKEN_KEY, token);
    }

    fn save_profile(&self, user: &UserInfo) {
        write(USER_NAME_KEY, user.display_name());
        write(USER_EMAIL_KEY, &user.email);
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            for key in [TOKEN_KEY, USER_NAME_KEY, USER_EMAIL_KEY] {
                let _ = storage.remove_item(key);
            }
        }
    }
}

/// In-process store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
    profile: RefCell<StoredProfile>,
}

impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save_token(token);
        store
    }

    pub fn set_token(&self, token: &str) {
        self.save_token(token);
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn profile(&self) -> StoredProfile {
        self.profile.borrow().clone()
    }

    fn save_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn save_profile(&self, user: &UserInfo) {
        *self.profile.borrow_mut() = StoredProfile {
            name: Some(user.display_name().to_string()),
            email: Some(user.email.clone()),
        };
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.profile.borrow_mut() = StoredProfile::default();
    }
}

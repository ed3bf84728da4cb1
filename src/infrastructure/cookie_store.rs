//! Cookie-backed implementation of KeyValueStore
//!
//! Each browser carries its own values; nothing is kept on the server.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::services::search_history::KeyValueStore;

pub struct CookieStore {
    jar: CookieJar,
}

impl CookieStore {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// The jar with every change made through this store, ready to be returned
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, key: &str, value: String) {
        let cookie = Cookie::build((key.to_string(), value))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .permanent();
        self.jar = self.jar.clone().add(cookie);
    }

    fn remove(&mut self, key: &str) {
        let cookie = Cookie::build((key.to_string(), String::new())).path("/");
        self.jar = self.jar.clone().remove(cookie);
    }
}

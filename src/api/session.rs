use std::cell::RefCell;

/// Storage key the login flow writes the bearer token under.
pub const TOKEN_KEY: &str = "auth_token";

/// Session credential store.
///
/// The client re-reads the store on every outbound request and erases it
/// when the backend answers 401, so implementations must not cache: a token
/// revoked mid-session has to take effect on the next call.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Production store: a single `localStorage` key. The value is written by
/// the login flow outside this crate; this module only reads and erases it.
pub struct BrowserSession;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// In-memory store for unit tests and non-browser builds.
#[derive(Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_session_round_trip() {
        let store = MemorySession::default();
        assert_eq!(store.get(), None);

        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));

        store.clear();
        assert_eq!(store.get(), None);

        // Clearing an already-empty store is a no-op, which is what makes
        // concurrent 401 handling harmless.
        store.clear();
        assert_eq!(store.get(), None);
    }
}

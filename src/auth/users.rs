use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use sha2::{Digest, Sha256};

/// In-memory user directory with hashed passwords and login sessions.
///
/// Demo-grade: accounts and sessions live for the process lifetime only.
/// Concurrent-safe without external locking.
#[derive(Debug, Default)]
pub struct UserDirectory {
    /// username -> sha256 hex digest of the password
    users: DashMap<String, String>,
    /// session token -> username
    sessions: DashMap<String, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            sessions: DashMap::new(),
        }
    }

    /// Registers a user. Returns `false` when the name is already taken.
    pub fn register(&self, username: &str, password: &str) -> bool {
        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(hash_password(password));
                true
            }
        }
    }

    /// Checks a username/password pair against the stored digest.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .map(|stored| *stored == hash_password(password))
            .unwrap_or(false)
    }

    /// Opens a new session for a user and returns its token.
    pub fn open_session(&self, username: &str) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), username.to_string());
        token
    }

    /// Resolves a session token back to its username, if the session exists.
    pub fn session_user(&self, token: &str) -> Option<String> {
        self.sessions.get(token).map(|user| user.clone())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

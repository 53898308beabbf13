
use babysitter_test_utils::prelude::*;

use crate::client::{
    api::ApiClient,
    error::{ClaimsError, Error, StorageError},
    guard::AuthState,
    session::{
        storage::{MemoryStorage, SessionStorage, DISPLAY_NAME_KEY, TOKEN_KEY},
        Session, SessionContext,
    },
};

/// The session never sends requests, so the transport is left out
fn context(storage: MemoryStorage) -> SessionContext<(), MemoryStorage> {
    SessionContext::new(ApiClient::new("http://localhost:8000", ()), storage)
}

fn persisted(token: &str, display_name: &str) -> MemoryStorage {
    MemoryStorage::default()
        .with_entry(TOKEN_KEY, token)
        .with_entry(DISPLAY_NAME_KEY, display_name)
}

use fractic_server_error::ServerError;

use crate::{
    data::models::session_user_model::SessionUserModel,
    domain::repositories::session_repository::SessionRepository, entities::KeyValueStorage,
    errors::InvalidSessionUser,
};

const USER_KEY: &str = "user";

pub(crate) struct SessionRepositoryImpl<K: KeyValueStorage> {
    storage: K,
}

impl<K: KeyValueStorage> SessionRepositoryImpl<K> {
    pub(crate) fn new(storage: K) -> Self {
        Self { storage }
    }
}

impl<K: KeyValueStorage> SessionRepository for SessionRepositoryImpl<K> {
    fn current_email(&self) -> Result<Option<String>, ServerError> {
        let Some(raw) = self.storage.get_item(USER_KEY) else {
            return Ok(None);
        };
        let user: SessionUserModel = serde_json::from_str(&raw)
            .map_err(|e| InvalidSessionUser::with_debug(USER_KEY, &e))?;
        Ok(user.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::MemoryKeyValueStorage;

    #[test]
    fn reads_email_of_logged_in_user() {
        let storage = MemoryKeyValueStorage::new();
        storage.set_item(
            "user",
            r#"{"type":"Employee","email":"employee@test.tld","password":"employee"}"#.into(),
        );

        let session = SessionRepositoryImpl::new(storage);

        assert_eq!(
            session.current_email().unwrap().as_deref(),
            Some("employee@test.tld")
        );
    }

    #[test]
    fn user_without_email_has_none() {
        let storage = MemoryKeyValueStorage::new();
        storage.set_item("user", r#"{"type":"Employee"}"#.into());
        assert_eq!(SessionRepositoryImpl::new(storage).current_email().unwrap(), None);
    }

    #[test]
    fn no_session_has_none() {
        let session = SessionRepositoryImpl::new(MemoryKeyValueStorage::new());
        assert_eq!(session.current_email().unwrap(), None);
    }

    #[test]
    fn malformed_user_is_an_error() {
        let storage = MemoryKeyValueStorage::new();
        storage.set_item("user", "employee@test.tld".into());
        assert!(SessionRepositoryImpl::new(storage).current_email().is_err());
    }
}

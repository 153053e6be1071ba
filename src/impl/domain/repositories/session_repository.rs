use fractic_server_error::ServerError;

pub(crate) trait SessionRepository: Send + Sync {
    /// Email of the logged-in user, if the session holds one.
    fn current_email(&self) -> Result<Option<String>, ServerError>;
}

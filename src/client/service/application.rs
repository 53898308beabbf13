use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, HttpTransport},
        error::Error,
        session::Session,
    },
    model::{api::MessageDto, application::ApplicationDto},
};

pub const LOGIN_REQUIRED_TO_APPLY: &str = "You must be logged in to apply.";
pub const APPLY_FAILED: &str = "Failed to apply";

pub struct ApplicationService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> ApplicationService<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// Apply for a job as the signed in user.
    ///
    /// Without a session no request is sent and [`Error::Unauthenticated`] is returned.
    pub async fn apply(
        &self,
        session: Option<&Session>,
        dto: &ApplicationDto,
    ) -> Result<MessageDto, Error> {
        if session.is_none() {
            return Err(Error::Unauthenticated(LOGIN_REQUIRED_TO_APPLY));
        }

        self.api
            .post::<_, MessageDto>("/apply", dto)
            .await
            .inspect_err(|e| tracing::debug!(job_id = dto.job_id, "Failed to apply: {}", e))
            .map_err(Error::from)
    }
}

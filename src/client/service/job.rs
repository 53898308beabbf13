use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, HttpTransport},
        error::Error,
        session::Session,
    },
    model::{
        api::MessageDto,
        job::{JobDto, NewJobDto},
    },
};

pub const LOGIN_REQUIRED_TO_POST: &str = "You must be logged in to post a job.";
pub const POST_JOB_FAILED: &str = "Failed to post job";
pub const LOAD_JOBS_FAILED: &str = "Failed to load jobs";

pub struct JobService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> JobService<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// Fetch every open job
    pub async fn list_jobs(&self) -> Result<Vec<JobDto>, Error> {
        self.api
            .get::<Vec<JobDto>>("/jobs")
            .await
            .inspect_err(|e| tracing::debug!("Failed to load jobs: {}", e))
            .map_err(Error::from)
    }

    /// Post a new job as the signed in user.
    ///
    /// Without a session no request is sent and [`Error::Unauthenticated`] is returned.
    pub async fn post_job(
        &self,
        session: Option<&Session>,
        dto: &NewJobDto,
    ) -> Result<MessageDto, Error> {
        if session.is_none() {
            return Err(Error::Unauthenticated(LOGIN_REQUIRED_TO_POST));
        }

        self.api
            .post::<_, MessageDto>("/jobs", dto)
            .await
            .inspect_err(|e| tracing::debug!("Failed to post job: {}", e))
            .map_err(Error::from)
    }
}

//! Mock endpoints for the Babysitter Match REST API.
//!
//! Each endpoint verifies the request the client sends (bearer header & JSON body) and is
//! checked for the expected number of calls by [`TestSetup::assert_mocks`].

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::TestSetup;

pub struct ApiFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

/// JSON body of a single job as returned by `GET /jobs`
pub fn job_json(id: i64, title: &str, description: &str) -> Value {
    json!({ "id": id, "title": title, "description": description })
}

impl<'a> ApiFixtures<'a> {
    /// `POST /login` for the given credentials, responding with `token`
    pub async fn create_login_endpoint(
        &mut self,
        email: &str,
        password: &str,
        token: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/login")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "email": email, "password": password })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "token": token }).to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }

    /// `POST /register` for the given body, responding with `token`
    pub async fn create_register_endpoint(
        &mut self,
        body: Value,
        token: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/register")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": "Registered", "token": token }).to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }

    /// `GET /jobs` responding with `jobs`
    pub async fn create_jobs_endpoint(&mut self, jobs: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/jobs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(jobs.to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }

    /// `POST /jobs` accepting `body` only with `Authorization: Bearer <token>`
    pub async fn create_post_job_endpoint(
        &mut self,
        token: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_authorized_endpoint("/jobs", token, body, "Job posted", expected_requests)
            .await
    }

    /// `POST /apply` accepting `body` only with `Authorization: Bearer <token>`
    pub async fn create_apply_endpoint(
        &mut self,
        token: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_authorized_endpoint("/apply", token, body, "Applied!", expected_requests)
            .await
    }

    /// Endpoint failing with `status` and an `{"detail": ...}` body
    pub async fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        detail: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "detail": detail }).to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }

    /// Endpoint that must never be called
    pub async fn create_unused_endpoint(&mut self, method: &str, path: &str) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(500)
            .expect(0)
            .create_async()
            .await
    }

    async fn create_authorized_endpoint(
        &mut self,
        path: &str,
        token: &str,
        body: Value,
        message: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", path)
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": message }).to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }
}

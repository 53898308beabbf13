//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock API server before a
//! test runs. Endpoints are queued by the `with_*` methods and created during `build()`.

use serde::Serialize;
use serde_json::Value;

use crate::{error::TestError, TestSetup};

enum Endpoint {
    Login {
        email: String,
        password: String,
        token: String,
    },
    Register {
        body: Value,
        token: String,
    },
    Jobs {
        jobs: Value,
    },
    PostJob {
        token: String,
        body: Value,
    },
    Apply {
        token: String,
        body: Value,
    },
    Error {
        method: String,
        path: String,
        status: usize,
        detail: Value,
    },
    Unused {
        method: String,
        path: String,
    },
}

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to start the mock server and
/// register every queued endpoint.
pub struct TestBuilder {
    endpoints: Vec<(Endpoint, usize)>,
    json_error: Option<serde_json::Error>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            endpoints: Vec::new(),
            json_error: None,
        }
    }

    /// Add a `POST /login` endpoint accepting `email` & `password` and returning `token`.
    pub fn with_login_endpoint(
        mut self,
        email: &str,
        password: &str,
        token: &str,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push((
            Endpoint::Login {
                email: email.to_string(),
                password: password.to_string(),
                token: token.to_string(),
            },
            expected_requests,
        ));
        self
    }

    /// Add a `POST /register` endpoint accepting exactly `body` and returning `token`.
    pub fn with_register_endpoint<B: Serialize>(
        mut self,
        body: &B,
        token: &str,
        expected_requests: usize,
    ) -> Self {
        if let Some(body) = self.to_json(body) {
            self.endpoints.push((
                Endpoint::Register {
                    body,
                    token: token.to_string(),
                },
                expected_requests,
            ));
        }
        self
    }

    /// Add a `GET /jobs` endpoint returning `jobs`.
    pub fn with_jobs_endpoint<J: Serialize>(mut self, jobs: &J, expected_requests: usize) -> Self {
        if let Some(jobs) = self.to_json(jobs) {
            self.endpoints
                .push((Endpoint::Jobs { jobs }, expected_requests));
        }
        self
    }

    /// Add a `POST /jobs` endpoint requiring `token` as bearer credential and exactly `body`.
    pub fn with_post_job_endpoint<B: Serialize>(
        mut self,
        token: &str,
        body: &B,
        expected_requests: usize,
    ) -> Self {
        if let Some(body) = self.to_json(body) {
            self.endpoints.push((
                Endpoint::PostJob {
                    token: token.to_string(),
                    body,
                },
                expected_requests,
            ));
        }
        self
    }

    /// Add a `POST /apply` endpoint requiring `token` as bearer credential and exactly `body`.
    pub fn with_apply_endpoint<B: Serialize>(
        mut self,
        token: &str,
        body: &B,
        expected_requests: usize,
    ) -> Self {
        if let Some(body) = self.to_json(body) {
            self.endpoints.push((
                Endpoint::Apply {
                    token: token.to_string(),
                    body,
                },
                expected_requests,
            ));
        }
        self
    }

    /// Add an endpoint failing with `status` and `{"detail": detail}`.
    pub fn with_error_endpoint<D: Serialize>(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        detail: &D,
        expected_requests: usize,
    ) -> Self {
        if let Some(detail) = self.to_json(detail) {
            self.endpoints.push((
                Endpoint::Error {
                    method: method.to_string(),
                    path: path.to_string(),
                    status,
                    detail,
                },
                expected_requests,
            ));
        }
        self
    }

    /// Add an endpoint the test expects the client never to call.
    pub fn with_unused_endpoint(mut self, method: &str, path: &str) -> Self {
        self.endpoints.push((
            Endpoint::Unused {
                method: method.to_string(),
                path: path.to_string(),
            },
            0,
        ));
        self
    }

    /// Start the mock server and create every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Running mock server with its mocks
    /// - `Err(TestError::JsonError)` - A queued body could not be serialized
    pub async fn build(self) -> Result<TestSetup, TestError> {
        if let Some(err) = self.json_error {
            return Err(err.into());
        }

        let mut setup = TestSetup::new().await;
        let mut mocks = Vec::new();

        for (endpoint, expected) in self.endpoints {
            let mut api = setup.api();

            let mock = match endpoint {
                Endpoint::Login {
                    email,
                    password,
                    token,
                } => {
                    api.create_login_endpoint(&email, &password, &token, expected)
                        .await
                }
                Endpoint::Register { body, token } => {
                    api.create_register_endpoint(body, &token, expected).await
                }
                Endpoint::Jobs { jobs } => api.create_jobs_endpoint(jobs, expected).await,
                Endpoint::PostJob { token, body } => {
                    api.create_post_job_endpoint(&token, body, expected).await
                }
                Endpoint::Apply { token, body } => {
                    api.create_apply_endpoint(&token, body, expected).await
                }
                Endpoint::Error {
                    method,
                    path,
                    status,
                    detail,
                } => {
                    api.create_error_endpoint(&method, &path, status, detail, expected)
                        .await
                }
                Endpoint::Unused { method, path } => {
                    api.create_unused_endpoint(&method, &path).await
                }
            };

            mocks.push(mock);
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }

    fn to_json<T: Serialize>(&mut self, value: &T) -> Option<Value> {
        match serde_json::to_value(value) {
            Ok(value) => Some(value),
            Err(err) => {
                self.json_error.get_or_insert(err);
                None
            }
        }
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

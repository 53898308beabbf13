use serde::{Deserialize, Serialize};

/// Application for a job, the message to the parent may be empty
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub job_id: i64,
    pub message: String,
}

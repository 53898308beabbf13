pub mod apply;
pub mod job_list;
pub mod login;
pub mod not_found;
pub mod post_job;
pub mod register;

pub use apply::Apply;
pub use job_list::JobList;
pub use login::Login;
pub use not_found::NotFound;
pub use post_job::PostJob;
pub use register::Register;

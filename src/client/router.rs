use dioxus::prelude::*;

use crate::client::{
    components::{Navbar, ProtectedLayout},
    routes::{Apply, JobList, Login, NotFound, PostJob, Register},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

        #[route("/")]
        JobList {},

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[layout(ProtectedLayout)]

            #[route("/post-job")]
            PostJob {},

            #[route("/apply/:job_id")]
            Apply { job_id: i64 },

        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

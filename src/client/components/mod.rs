pub mod card;
pub mod job_card;
pub mod navbar;
pub mod protected_layout;

pub use card::Card;
pub use job_card::JobCard;
pub use navbar::Navbar;
pub use protected_layout::ProtectedLayout;

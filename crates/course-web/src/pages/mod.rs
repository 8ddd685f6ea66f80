mod course;
mod home;
mod not_found;

pub use course::{BootcampPage, WebinarPage};
pub use home::HomePage;
pub use not_found::NotFound;

pub mod attendance;
pub mod not_found;

pub use attendance::Attendance;
pub use not_found::NotFound;

pub mod download;
pub mod timer;

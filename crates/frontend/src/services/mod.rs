pub mod api;
pub mod timer;

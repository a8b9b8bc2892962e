pub mod attendance;
pub mod event;
pub mod person;
pub mod session;

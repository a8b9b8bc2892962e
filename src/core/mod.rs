pub mod attendance;
pub mod backup;
pub mod insights;
pub mod log;
pub mod recorder;
pub mod roster;
pub mod schedule;
pub mod swipe;

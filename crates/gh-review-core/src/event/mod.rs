//! Notifications emitted by the thread store for the presentation layer.

mod announcement;

pub use announcement::Announcement;

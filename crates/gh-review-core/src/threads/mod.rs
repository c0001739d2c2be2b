//! Conversation threads: reconstruction from the flat GitHub comment list
//! and the client-side store that mutates them.

mod clock;
mod group;
mod ids;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use group::group_into_threads;
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use store::ThreadStore;

//! Repository modules for stored state
//!
//! Provides repository pattern implementations for the task collection and
//! the user profile, on top of any [`crate::TaskStore`].

mod filter;
mod profile;
mod task;
mod validation;

pub use filter::derive_visible_list;
pub use profile::{NAME_KEY, ProfileRepository};
pub use task::{TASK_ARRAY_KEY, TaskRepository};
pub use validation::validate_title;

//! User profiles and progression.

mod profile;
mod progress;

pub use profile::UserProfile;
pub use progress::{xp_for_next_level, Progress};

pub mod apply;
pub mod identity;
pub mod lifecycle;
pub mod manager;
pub mod naming;
pub mod restart;

pub use identity::Identity;
pub use manager::{ProfileManager, ProfileSummary};
pub use naming::{DEFAULT_PROFILE_ID, resolve_collision, sanitize_profile_id};
pub use restart::{ProcessRestarter, Restarter};

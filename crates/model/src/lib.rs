//! Directory records shared by the RTM crates.
//!
//! These are passive snapshots of teams, users, channels and attached files
//! as the server describes them. Timestamps are kept as the opaque strings the
//! server sends.

mod de;
pub mod file;
pub mod team;
pub mod user;

pub use {
    file::AttachedFile,
    team::{Channel, Team},
    user::{CONN_CONNECTED, User, UserRole, UserType},
};

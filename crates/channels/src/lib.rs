//! Inbound message gating for RTM bots.
//!
//! Decides whether a bot should act on an inbound message, based on who sent
//! it, where, and whether the bot was mentioned.

pub mod access;
pub mod config;
pub mod gating;

pub use {
    access::{AccessDenied, Inbound, check_access},
    config::AccessConfig,
    gating::{ChannelPolicy, DmPolicy, MentionMode},
};

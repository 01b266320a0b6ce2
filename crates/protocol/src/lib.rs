//! RTM message interpretation.
//!
//! Messages arrive as loosely-typed JSON objects whose field set depends on
//! the message type and on the client that produced them. [`Message`] keeps
//! them as an open map and derives everything else on demand:
//!
//! - classification by the `type` field ([`MessageKind`])
//! - reply and quote construction
//! - `@<==uid=> ` mention detection ([`mention`])
//! - attached-file recovery from the raw payload ([`attachment`])
//!
//! Missing fields never fail classification or mention parsing; only
//! attachment extraction reports errors, because it needs the raw payload.

pub mod attachment;
pub mod error;
pub mod kind;
pub mod mention;
pub mod message;

pub use {
    error::{Error, Result},
    kind::MessageKind,
    message::{Message, keys},
    rtm_model::{AttachedFile, User},
};

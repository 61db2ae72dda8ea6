//! Referee wire protocol.
//!
//! Line-based text protocol between the driver and the game core: command
//! parsing on the way in, perspective-relative state serialization on the
//! way out.

pub mod parser;
pub mod view;

pub use parser::{parse_command, Command};
pub use view::{relative_owner, send_state};

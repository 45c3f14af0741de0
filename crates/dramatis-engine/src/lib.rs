//! Dramatis — the playback engine.
//!
//! Two cooperating pieces: the command interpreter, which executes a
//! chapter's commands from a viewer's persisted cursor and pauses on every
//! text line, and the conversation state machine, which walks a viewer
//! through setup (language → project → chapter) and gates when the
//! interpreter runs.

pub mod config;
pub mod conversation;
pub mod events;
pub mod interpreter;

pub use config::PlayerConfig;
pub use conversation::{handle_advance, handle_text_input};
pub use events::{AdvanceSignal, TextInput};
pub use interpreter::{RunOutcome, run_from};

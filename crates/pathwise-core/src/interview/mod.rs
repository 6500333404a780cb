//! Mock interview engine.
//!
//! - `InterviewPromptBuilder`: renders (position, question type, turns) into
//!   one completion prompt
//! - `InterviewSession`: the turn-taking state machine
//! - `replay`: word-by-word re-emission of a finished reply

pub mod prompt;
pub mod replay;
pub mod session;

pub use prompt::InterviewPromptBuilder;
pub use replay::{Pace, Replay, paced, replay};
pub use session::{InterviewSession, OPENING_LINE, SessionOptions, StartPolicy};

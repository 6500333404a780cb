//! Interactive terminal pieces shared by the interview and coach loops:
//! readline input, slash commands, welcome banner, markdown rendering and
//! paced output.

pub mod banner;
pub mod commands;
pub mod input;
pub mod output;
pub mod renderer;

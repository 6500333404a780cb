//! CLI command definitions for the `pathwise` binary.
//!
//! Uses clap derive macros for argument parsing. Account setup
//! (`signup`, `import-users`) and the informational commands (`personas`,
//! `check`, `completions`) skip the login gate; everything else sits behind it.

pub mod advise;
pub mod auth;
pub mod chat;
pub mod coach;
pub mod interview;
pub mod personas;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use pathwise_types::advisory::NetworkingPlatform;
use pathwise_types::interview::QuestionType;

/// Career advice and mock interviews from your terminal.
#[derive(Parser)]
#[command(name = "pathwise", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append logs to this file instead of the terminal.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account.
    Signup {
        /// Username (prompted when omitted).
        #[arg(long)]
        username: Option<String>,

        /// Email address (prompted when omitted).
        #[arg(long)]
        email: Option<String>,
    },

    /// Copy accounts from an earlier career_coach.db credential database.
    ///
    /// Imported passwords keep their old hash until the next login.
    ImportUsers {
        /// Path to the old SQLite database.
        database: PathBuf,
    },

    /// Practice a mock interview.
    Interview {
        /// Position you are interviewing for.
        #[arg(long, short)]
        position: Option<String>,

        /// Question type: technical, behavioral, leadership, problem-solving.
        #[arg(long = "type", short = 't')]
        question_type: Option<QuestionType>,

        /// Print replies at once instead of word by word.
        #[arg(long)]
        no_pace: bool,
    },

    /// Chat with the career coach.
    Ask {
        /// Print replies at once instead of word by word.
        #[arg(long)]
        no_pace: bool,
    },

    /// Weekly action plan toward a target role.
    Plan {
        #[arg(long)]
        industry: Option<String>,

        /// Years of experience (0-30).
        #[arg(long)]
        years: Option<u8>,

        #[arg(long)]
        current_role: Option<String>,

        #[arg(long)]
        target_role: Option<String>,
    },

    /// Review a resume, optionally against a job description.
    Resume {
        /// Resume file (pdf, docx, txt, md).
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Resume text pasted directly.
        #[arg(long)]
        text: Option<String>,

        /// Job description text.
        #[arg(long, conflicts_with = "job_file")]
        job: Option<String>,

        /// Job description file (pdf, docx, txt, md).
        #[arg(long)]
        job_file: Option<PathBuf>,
    },

    /// Research the job market for a role and location.
    Market {
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        location: Option<String>,
    },

    /// Learning plan for a set of skills.
    Skills {
        /// Skills to learn, comma separated.
        #[arg(long)]
        skills: Option<String>,

        /// Plan length in months (1-12).
        #[arg(long)]
        months: Option<u8>,
    },

    /// Networking strategy for a goal.
    Network {
        #[arg(long)]
        goal: Option<String>,

        /// linkedin, industry-events, professional-associations, cold-outreach.
        #[arg(long)]
        platform: Option<NetworkingPlatform>,
    },

    /// List the loaded personas.
    Personas,

    /// Verify the configured completion provider responds.
    Check,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command needs a logged-in user.
    pub fn requires_login(&self) -> bool {
        !matches!(
            self,
            Commands::Signup { .. }
                | Commands::ImportUsers { .. }
                | Commands::Personas
                | Commands::Check
                | Commands::Completions { .. }
        )
    }
}

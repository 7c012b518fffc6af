//! Command-line arguments

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sysmedic", version, about = "SYSMEDIC clinic administration client")]
pub struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Persist a bearer token issued by the backend
    Login {
        /// JWT returned by the login endpoint
        #[arg(long, env = "SYSMEDIC_TOKEN")]
        token: String,
    },
    /// Forget the persisted token
    Logout,
    /// Show whether a token is stored and whether it is still valid
    Status,
    /// Print the claims of the current session
    Whoami,
    /// Ask the backend for AI-assisted diagnostic suggestions
    Suggest {
        #[arg(long)]
        symptoms: String,
        #[arg(long)]
        specialty: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        gender: Option<String>,
        /// Current physical findings
        #[arg(long)]
        findings: Option<String>,
        /// Vital signs, free text
        #[arg(long)]
        vitals: Option<String>,
    },
}

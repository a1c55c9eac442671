use clap::Subcommand;

/// Top-level commands for the `faq` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List entries newest-first with author display data.
    List {
        /// Cap the number of entries returned (default from config).
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Fetch a single entry by id.
    Get { id: String },
    /// Submit a question/answer pair (requires login).
    Ask {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
    },
    /// Delete an entry by id (requires login).
    Delete { id: String },
    /// Session management.
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

/// `faq auth` subcommands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthAction {
    /// Store a session token (paste a Clerk JWT).
    Login {
        #[arg(long)]
        token: String,
    },
    /// Show the current session state.
    Status,
    /// Remove stored credentials.
    Logout,
}

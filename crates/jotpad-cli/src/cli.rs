use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jotpad")]
#[command(about = "Manage your Jotpad notes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the notes service base URL for this invocation
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List your notes
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        #[arg(short, long, default_value = "")]
        title: String,
        /// Note content
        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// Edit an existing note
    Edit {
        /// Note ID or unique ID prefix
        id: String,
        /// Replacement title (kept when omitted)
        #[arg(short, long)]
        title: Option<String>,
        /// Replacement content (kept when omitted)
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete an existing note
    #[command(alias = "rm")]
    Delete {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Inspect or write the client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write the config file
    Init {
        /// Notes service base URL (e.g. http://localhost:5000/api)
        #[arg(long, value_name = "URL")]
        api_url: String,
        /// Optional bearer token sent with every request
        #[arg(long, value_name = "TOKEN")]
        access_token: Option<String>,
    },
    /// Print the effective configuration
    Show,
}

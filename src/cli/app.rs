//! CLI definitions and entry point

use std::env;
use std::io::{self, Write};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::debug;

use super::commands;
use trello::config::{self, Config};
use trello::{Client, Credentials, OutputMode};

/// trello - Manage Trello boards, lists and cards from the command line
#[derive(Parser, Debug)]
#[command(
    name = "trello",
    version,
    about = "Manage Trello boards, lists and cards via the Trello API",
    long_about = "A command-line client for the Trello API.\n\n\
                  Output is JSON when piped (for scripts and agents) and aligned \
                  tables in a terminal.\n\n\
                  Credential resolution order:\n  \
                  1. TRELLO_API_KEY + TRELLO_API_TOKEN env vars\n  \
                  2. Config file (trello auth setup)"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output indented JSON (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage Trello authentication
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Show tool info: config path, auth status and environment
    Info,

    /// Manage boards
    Boards {
        #[command(subcommand)]
        action: BoardsAction,
    },

    /// Manage lists
    Lists {
        #[command(subcommand)]
        action: ListsAction,
    },

    /// Manage cards
    Cards {
        #[command(subcommand)]
        action: CardsAction,
    },

    /// View members and their boards, cards and workspaces
    Members {
        #[command(subcommand)]
        action: MembersAction,
    },

    /// Manage checklists and their items
    Checklists {
        #[command(subcommand)]
        action: ChecklistsAction,
    },

    /// Manage board labels
    Labels {
        #[command(subcommand)]
        action: LabelsAction,
    },

    /// Search cards, boards and members
    Search(SearchArgs),
}

#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Validate and save API credentials to the config file
    Setup {
        /// API key (https://trello.com/power-ups/admin)
        api_key: String,
        /// API token
        api_token: String,
    },

    /// Show the current authentication status
    Status,

    /// Remove saved credentials from the config file
    Logout,
}

#[derive(Subcommand, Debug)]
pub enum BoardsAction {
    /// List boards of the authenticated member
    List {
        /// Filter: open, closed, all, members, organization, public, starred
        #[arg(long, default_value = "open")]
        filter: String,
    },

    /// Get a board by ID or short link
    Get {
        /// Board ID
        id: String,
    },

    /// Create a board
    Create {
        /// Board name
        name: String,
        /// Board description
        #[arg(long)]
        desc: Option<String>,
        /// Workspace to create the board in
        #[arg(long)]
        workspace: Option<String>,
        /// Privacy level: private, public, org
        #[arg(long, default_value = "private")]
        privacy: String,
    },

    /// Update a board's name, description or state
    Update {
        /// Board ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        desc: Option<String>,
        /// Archive (true) or reopen (false) the board
        #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
        closed: Option<bool>,
    },

    /// Delete a board permanently
    Delete {
        /// Board ID
        id: String,
    },

    /// List members of a board
    Members {
        /// Board ID
        id: String,
    },

    /// List labels defined on a board
    Labels {
        /// Board ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListsAction {
    /// List the lists on a board
    List {
        /// Board ID (required)
        #[arg(long)]
        board: Option<String>,
        /// Filter: open, closed, all
        #[arg(long, default_value = "open")]
        filter: String,
    },

    /// Get a list by ID
    Get {
        /// List ID
        id: String,
    },

    /// Create a list on a board
    Create {
        /// List name
        name: String,
        /// Board ID (required)
        #[arg(long)]
        board: Option<String>,
        /// Position: top, bottom, or a positive number
        #[arg(long)]
        pos: Option<String>,
    },

    /// Rename a list
    Rename {
        /// List ID
        id: String,
        /// New name
        name: String,
    },

    /// Archive a list
    Archive {
        /// List ID
        id: String,
    },

    /// Restore an archived list
    Unarchive {
        /// List ID
        id: String,
    },

    /// List the cards in a list
    Cards {
        /// List ID
        id: String,
        /// Filter: open, closed, all
        #[arg(long, default_value = "open")]
        filter: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CardsAction {
    /// List cards on a board or in a list
    List {
        /// Board ID
        #[arg(long)]
        board: Option<String>,
        /// List ID
        #[arg(long)]
        list: Option<String>,
        /// Filter: open, closed, all, visible
        #[arg(long, default_value = "open")]
        filter: String,
    },

    /// Get a card by ID or short link
    Get {
        /// Card ID
        id: String,
    },

    /// Create a card
    Create(CardCreateArgs),

    /// Update a card
    Update(CardUpdateArgs),

    /// Delete a card permanently
    Delete {
        /// Card ID
        id: String,
    },

    /// Move a card to another list or board
    Move {
        /// Card ID
        id: String,
        /// Target list ID (required)
        #[arg(long)]
        list: Option<String>,
        /// Target board ID, for cross-board moves
        #[arg(long)]
        board: Option<String>,
    },

    /// Archive a card
    Archive {
        /// Card ID
        id: String,
    },

    /// Comment on a card
    Comment {
        /// Card ID
        id: String,
        /// Comment text
        text: String,
    },

    /// Show the checklists on a card
    Checklists {
        /// Card ID
        id: String,
    },

    /// List attachments on a card
    Attachments {
        /// Card ID
        id: String,
    },

    /// Add or remove a label on a card
    Label {
        /// Card ID
        id: String,
        /// Label ID to add
        #[arg(long)]
        add: Option<String>,
        /// Label ID to remove
        #[arg(long)]
        remove: Option<String>,
    },

    /// Add or remove a member on a card
    Member {
        /// Card ID
        id: String,
        /// Member ID to add
        #[arg(long)]
        add: Option<String>,
        /// Member ID to remove
        #[arg(long)]
        remove: Option<String>,
    },
}

/// Arguments for `cards create`
#[derive(Args, Debug)]
pub struct CardCreateArgs {
    /// Card name
    pub name: String,
    /// List ID (required)
    #[arg(long)]
    pub list: Option<String>,
    /// Card description
    #[arg(long)]
    pub desc: Option<String>,
    /// Due date (ISO-8601, e.g. 2024-12-31)
    #[arg(long)]
    pub due: Option<String>,
    /// Position: top, bottom, or a positive number
    #[arg(long)]
    pub pos: Option<String>,
    /// Comma-separated label IDs
    #[arg(long)]
    pub labels: Option<String>,
}

/// Arguments for `cards update`
#[derive(Args, Debug)]
pub struct CardUpdateArgs {
    /// Card ID
    pub id: String,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New description
    #[arg(long)]
    pub desc: Option<String>,
    /// Due date (ISO-8601)
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,
    /// Archive (true) or reopen (false) the card
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub closed: Option<bool>,
    /// Mark the due date complete (true) or not (false)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub due_complete: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum MembersAction {
    /// Show the authenticated member
    Me,

    /// Get a member by ID or username
    Get {
        /// Member ID or username
        who: String,
    },

    /// List a member's boards
    Boards {
        /// Member ID or username
        #[arg(default_value = "me")]
        who: String,
        /// Filter: open, closed, all, members, organization, public, starred
        #[arg(long, default_value = "open")]
        filter: String,
    },

    /// List cards assigned to a member
    Cards {
        /// Member ID or username
        #[arg(default_value = "me")]
        who: String,
        /// Filter: open, closed, all, visible
        #[arg(long, default_value = "open")]
        filter: String,
    },

    /// List a member's workspaces
    Workspaces {
        /// Member ID or username
        #[arg(default_value = "me")]
        who: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChecklistsAction {
    /// Get a checklist with its items
    Get {
        /// Checklist ID
        id: String,
    },

    /// Create a checklist on a card
    Create {
        /// Checklist name
        name: String,
        /// Card ID (required)
        #[arg(long)]
        card: Option<String>,
    },

    /// Delete a checklist
    Delete {
        /// Checklist ID
        id: String,
    },

    /// Add an item to a checklist
    AddItem {
        /// Item text
        name: String,
        /// Checklist ID (required)
        #[arg(long)]
        checklist: Option<String>,
    },

    /// Mark a check item complete
    Check(CheckItemArgs),

    /// Mark a check item incomplete
    Uncheck(CheckItemArgs),
}

/// Arguments identifying a check item
#[derive(Args, Debug)]
pub struct CheckItemArgs {
    /// Check item ID
    pub item: String,
    /// Card ID (required)
    #[arg(long)]
    pub card: Option<String>,
    /// Checklist ID (required)
    #[arg(long)]
    pub checklist: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum LabelsAction {
    /// Get a label by ID
    Get {
        /// Label ID
        id: String,
    },

    /// Create a label on a board
    Create {
        /// Board ID (required)
        #[arg(long)]
        board: Option<String>,
        /// Label name
        #[arg(long, default_value = "")]
        name: String,
        /// Colour: green, yellow, orange, red, purple, blue, sky, lime, pink, black
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a label
    Delete {
        /// Label ID
        id: String,
    },
}

/// Arguments for `search`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search terms
    pub query: String,
    /// Limit to model types: cards, boards, members (repeatable or comma-separated)
    #[arg(long = "type", value_delimiter = ',')]
    pub types: Vec<String>,
    /// Maximum results per type (1-1000)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: u32,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mode = OutputMode::detect(cli.json, cli.pretty);
    debug!("output mode: {mode:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Auth { action } => commands::auth(action, mode, &mut out)?,
        Command::Info => commands::info(mode, &mut out)?,
        Command::Boards { action } => commands::boards(action, &connect()?, mode, &mut out)?,
        Command::Lists { action } => commands::lists(action, &connect()?, mode, &mut out)?,
        Command::Cards { action } => commands::cards(action, &connect()?, mode, &mut out)?,
        Command::Members { action } => commands::members(action, &connect()?, mode, &mut out)?,
        Command::Checklists { action } => {
            commands::checklists(action, &connect()?, mode, &mut out)?;
        },
        Command::Labels { action } => commands::labels(action, &connect()?, mode, &mut out)?,
        Command::Search(args) => commands::search(&args, &connect()?, mode, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// Look up an environment variable
pub fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Build an API client for the given credentials, honouring `TRELLO_API_URL`
pub fn client_for(credentials: Credentials) -> anyhow::Result<Client> {
    let client = match env_var(config::API_URL_ENV).filter(|url| !url.is_empty()) {
        Some(base_url) => {
            debug!("using API base URL {base_url}");
            Client::with_base_url(credentials, &base_url)?
        },
        None => Client::new(credentials)?,
    };
    Ok(client)
}

/// Resolve credentials and build the client shared by every API command
fn connect() -> anyhow::Result<Client> {
    let (credentials, source) = match config::resolve_credentials(env_var, &Config::default()) {
        Some(found) => found,
        None => {
            let saved = Config::load().context("failed to load config")?;
            config::resolve_credentials(env_var, &saved).ok_or_else(|| {
                anyhow::anyhow!(
                    "not authenticated; run: trello auth setup <api-key> <api-token>\n\
                     or set {} and {} env vars",
                    config::API_KEY_ENV,
                    config::API_TOKEN_ENV
                )
            })?
        },
    };

    debug!("using credentials from {}", source.as_str());
    client_for(credentials)
}

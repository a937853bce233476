use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_contact::{DEFAULT_LIST_LIMIT, Status};
use portfolio_contact_form::ContactSubmission;

/// portfolio - personal site with a contact inbox
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio site and contact inbox", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Contact inbox
    #[command(subcommand)]
    Contact(ContactCommands),
}

#[derive(Subcommand)]
enum ContactCommands {
    /// Send a message through the contact form flow
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Backend base URL (overrides config file)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// List stored messages, newest first
    List {
        /// unread, read or archived
        #[arg(long)]
        status: Option<Status>,

        /// 0 lists every message
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },
    /// Change the status of a stored message
    SetStatus { id: String, status: Status },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = portfolio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(&config.logging.level, &config.logging.format)?;

    match cli.command {
        Commands::Serve { host, port } => portfolio::cli::serve(config, host, port).await,
        Commands::Migrate => portfolio::cli::migrate(config).await,
        Commands::Contact(ContactCommands::Send {
            name,
            email,
            subject,
            message,
            base_url,
        }) => {
            let submission = ContactSubmission {
                name,
                email,
                subject,
                message,
            };

            portfolio::cli::send(config, submission, base_url).await
        }
        Commands::Contact(ContactCommands::List { status, limit }) => {
            portfolio::cli::list(config, status, limit).await
        }
        Commands::Contact(ContactCommands::SetStatus { id, status }) => {
            portfolio::cli::set_status(config, id, status).await
        }
    }
}

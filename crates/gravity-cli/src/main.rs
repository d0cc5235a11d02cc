use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gravity_cli::{inbox, ApiError, GravityClient};
use gravity_core::api::StreamQuery;
use gravity_core::engine::DraftRotation;
use gravity_core::models::StreamFilter;
use gravity_core::ClientStore;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gravity-cli")]
#[command(about = "CLI interface for the Gravity inbox API")]
struct Cli {
    /// Server origin
    #[arg(long, env = "GRAVITY_SERVER", default_value = "http://127.0.0.1:3001")]
    server: String,

    /// Pretty-print JSON output
    #[arg(long, short)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of the ranked stream
    Stream {
        /// all, high or unread
        #[arg(long)]
        filter: Option<String>,
        /// high, medium or low
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
        /// Cursor from a previous page
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Show one stream item
    Show { id: String },

    /// Mark an item read
    Read { id: String },

    /// Send a message to an item
    Send {
        id: String,
        /// Message content
        content: String,
    },

    /// Get or refine the draft reply for a message
    Draft {
        id: String,
        message_id: String,
        /// Instruction such as "make it more formal"
        #[arg(long, short)]
        refinement: Option<String>,
    },

    /// Replace a message's draft with a regenerated one
    Regenerate { id: String, message_id: String },

    /// Check server health
    Health,

    /// Ranked inbox overview with unread count
    Inbox {
        /// all, high or unread
        #[arg(long)]
        filter: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let client = GravityClient::new(&cli.server)?;
    let pretty = cli.pretty;

    match cli.command {
        Commands::Stream {
            filter,
            priority,
            limit,
            cursor,
        } => {
            let query = StreamQuery {
                filter,
                priority,
                limit: limit.map(|l| l.to_string()),
                cursor,
            };
            print_json(&client.stream(&query).await?, pretty)
        }
        Commands::Show { id } => print_json(&client.get_item(&id).await?, pretty),
        Commands::Read { id } => print_json(&client.mark_read(&id).await?, pretty),
        Commands::Send { id, content } => {
            print_json(&client.send_message(&id, &content).await?, pretty)
        }
        Commands::Draft {
            id,
            message_id,
            refinement,
        } => print_json(
            &client.draft(&id, &message_id, refinement.as_deref()).await?,
            pretty,
        ),
        Commands::Regenerate { id, message_id } => {
            print_json(&client.regenerate(&id, &message_id).await?, pretty)
        }
        Commands::Health => print_json(&client.health().await?, pretty),
        Commands::Inbox { filter } => {
            let items = client.fetch_all(None).await?;
            let mut store = ClientStore::new(items, DraftRotation::from_entropy());
            store.set_filter(StreamFilter::from_param(filter.as_deref()));
            print_json(&inbox::summarize(&store), pretty)
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        let code = match e.downcast_ref::<ApiError>() {
            Some(api) if api.is_not_found() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

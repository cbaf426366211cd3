mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use eventboard_core::{AppConfig, AppwriteGateway, EventDraft};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventboard")]
#[command(about = "List, search and edit your events")]
struct Cli {
    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events in chronological order
    List {
        /// Only show events in this category ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show events whose title, description or location contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one event
    Show { id: String },
    /// Create an event (prompts for anything not given)
    New {
        #[command(flatten)]
        fields: EventFields,
    },
    /// Edit an event (prompts when no fields are given)
    Edit {
        id: String,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Print sharing links for an event
    Share { id: String },
    /// List the available categories and priorities
    Categories,
}

#[derive(Args)]
pub struct EventFields {
    #[arg(short, long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// YYYY-MM-DD or DD/MM/YYYY
    #[arg(short, long)]
    date: Option<String>,

    /// HH:MM or hh:mm am/pm
    #[arg(long)]
    time: Option<String>,

    #[arg(short, long)]
    location: Option<String>,

    #[arg(short, long)]
    category: Option<String>,

    #[arg(short, long)]
    priority: Option<String>,

    /// Picture URL (a placeholder is used when omitted)
    #[arg(long)]
    picture: Option<String>,
}

impl EventFields {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.picture.is_none()
    }

    /// Overwrite the draft's fields with the ones given on the command line.
    fn apply_to(self, draft: &mut EventDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = Some(description);
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(time) = self.time {
            draft.time = time;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(priority) = self.priority {
            draft.priority = priority;
        }
        if let Some(picture) = self.picture {
            draft.picture = Some(picture);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { category, search } => {
            let (_, gateway) = connect()?;
            commands::list::run(&gateway, category, search, cli.json).await
        }
        Commands::Show { id } => {
            let (_, gateway) = connect()?;
            commands::show::run(&gateway, &id, cli.json).await
        }
        Commands::New { fields } => {
            let (_, gateway) = connect()?;
            commands::new::run(&gateway, fields, cli.json).await
        }
        Commands::Edit { id, fields } => {
            let (_, gateway) = connect()?;
            commands::edit::run(&gateway, &id, fields, cli.json).await
        }
        Commands::Delete { id, yes } => {
            let (_, gateway) = connect()?;
            commands::delete::run(&gateway, &id, yes).await
        }
        Commands::Share { id } => {
            let (config, gateway) = connect()?;
            commands::share::run(&gateway, &config, &id, cli.json).await
        }
        Commands::Categories => commands::categories::run(cli.json),
    }
}

/// Load configuration and build the document gateway. Missing settings are fatal.
fn connect() -> Result<(AppConfig, AppwriteGateway)> {
    let config = AppConfig::load()?;
    let gateway = AppwriteGateway::new(&config)?;
    Ok((config, gateway))
}

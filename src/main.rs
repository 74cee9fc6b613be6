//! CLI entry point for posts-json

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "posts-json")]
#[command(version)]
#[command(about = "Convert markdown blog posts into JSON records and a sorted index", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `convert`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert posts to JSON and rebuild the index
    #[command(alias = "c")]
    Convert,

    /// Serve the blog directory with CORS headers
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List posts, tags or categories
    List {
        /// Type of content to list (post, tag, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Delete the generated JSON files and index
    Clean,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Category of the new post
        #[arg(long)]
        category: Option<String>,

        /// Comma separated tags; also used to pick a category
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Opening text of the post, also used for the excerpt
        #[arg(short, long)]
        body: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(cli).await {
        eprintln!("{}", posts_json::error::report(&e));
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        "posts_json=debug,info"
    } else {
        "posts_json=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let blog = posts_json::Blog::new(&base_dir)?;

    match cli.command.unwrap_or(Commands::Convert) {
        Commands::Convert => {
            let posts = blog.convert()?;
            println!("Successfully converted {} posts!", posts.len());
        }

        Commands::Serve { port, ip } => {
            let port = port.unwrap_or(blog.config.server.port);
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            tracing::info!("Starting server at http://{}:{}", ip, port);
            posts_json::server::start(&blog, &ip, port).await?;
        }

        Commands::List { r#type } => {
            posts_json::commands::list::run(&blog, &r#type)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning generated files...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::New {
            title,
            category,
            tags,
            body,
        } => {
            let path = blog.new_post(&title, category.as_deref(), &tags, body.as_deref())?;
            println!("Created: {}", path.display());
        }
    }

    Ok(())
}

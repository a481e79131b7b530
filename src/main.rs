use anyhow::{Context, Result};
use bookshelf::library::Library;
use bookshelf::output;
use bookshelf::tree::DocumentPath;
use bookshelf::utils::{self, AppConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Browse and search a directory tree of markdown books")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Books root directory (overrides BOOKSHELF_ROOT and the config file)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:8000
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Render a page, e.g. `book-one/volume/chapter`
    Show {
        /// Virtual path: book[/subpath]
        path: String,
    },
    /// Search every document for a literal, case-insensitive string
    Search {
        /// Search query
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all books
    Books,
    /// Show the config file location and effective settings
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    #[cfg(feature = "server")]
    let cli_bind = match &cli.command {
        Commands::Serve { bind } => bind.clone(),
        _ => None,
    };
    #[cfg(not(feature = "server"))]
    let cli_bind = None;

    let config = AppConfig::load()?.with_process_overrides(cli.root.clone(), cli_bind);
    let color = !cli.no_color;

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { .. } => {
            if !config.books_root.is_dir() {
                anyhow::bail!("Books root {} is not a directory", config.books_root.display());
            }
            tracing::info!("Serving books from {}", config.books_root.display());
            let library = Library::from_config(&config);
            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime.block_on(bookshelf::server::serve(library, &config.bind))?;
        }
        Commands::Show { path } => {
            let library = Library::from_config(&config);
            let document_path = DocumentPath::parse(&path)?;
            let page = library
                .render_path(&document_path)
                .with_context(|| format!("Cannot show {}", path))?;
            output::print_page(&page, color)?;
        }
        Commands::Search { query, json } => {
            let library = Library::from_config(&config);
            let results = library.search(&query.join(" "));
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                output::print_search_results(&results, color)?;
            }
        }
        Commands::Books => {
            let library = Library::from_config(&config);
            let books = library
                .books()
                .with_context(|| format!("Cannot list {}", config.books_root.display()))?;
            output::print_books(&books, color)?;
        }
        Commands::Config { save } => {
            if save {
                config.save()?;
            }
            println!("Config file: {}", utils::get_config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

//! Semnet CLI — explore a semantic association graph from the terminal.
//!
//! Usage:
//!   semnet explore <term> [--lang en] [--db path] [--max-related N]
//!   semnet overrides <subcommand> [--db path]

use clap::{Parser, Subcommand};
use semnet::{
    ConceptNetSource, Explorer, OpenOverrideStore, OverrideStore, ReconcileOptions,
    ReconciledGraph, RenderSink, SqliteOverrideStore, Term, TermFilter, DEFAULT_ENDPOINT,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "semnet",
    version,
    about = "Semantic association graph explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore the association graph interactively, starting from a term
    Explore {
        /// The starting center term
        term: String,
        /// ConceptNet language code
        #[arg(long, default_value = "en")]
        lang: String,
        /// Remote API endpoint
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        /// Cap on remote-sourced related terms
        #[arg(long, default_value_t = 20)]
        max_related: usize,
        /// Restrict remote terms to Han script
        #[arg(long)]
        han_only: bool,
        /// Path to the overrides database file
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Manage stored overrides
    Overrides {
        #[command(subcommand)]
        action: OverrideAction,
        /// Path to the overrides database file
        #[arg(long, global = true)]
        db: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum OverrideAction {
    /// List all centers with overrides
    List,
    /// Record a user-added association
    Add {
        /// Center term the association belongs to
        center: String,
        /// The related term to add
        term: String,
    },
    /// Suppress a term for a center
    Delete {
        /// Center term the suppression belongs to
        center: String,
        /// The related term to hide
        term: String,
    },
}

/// Get the default database path (~/.local/share/semnet/semnet.db)
fn default_db_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    let semnet_dir = data_dir.join("semnet");
    std::fs::create_dir_all(&semnet_dir).ok();
    semnet_dir.join("semnet.db")
}

fn open_store(db: Option<PathBuf>) -> Result<SqliteOverrideStore, String> {
    let db_path = db.unwrap_or_else(default_db_path);
    SqliteOverrideStore::open(&db_path).map_err(|e| format!("Failed to open database: {}", e))
}

/// Render surface for the terminal: prints the reconciled graph
struct TerminalSink;

impl RenderSink for TerminalSink {
    fn graph_updated(&mut self, center: &Term, graph: &ReconciledGraph) {
        println!();
        println!("center: {}", center);
        if graph.related.is_empty() {
            println!("  (no related terms)");
            return;
        }
        for (i, link) in graph.links.iter().enumerate() {
            println!("  [{:>2}] {}  (weight {:.1})", i + 1, link.target, link.weight);
        }
    }
}

/// Resolve a REPL argument that may be an index into the related list
fn resolve_term(explorer: &Explorer, arg: &str) -> Option<Term> {
    let related = explorer.graph().map(|g| g.related.as_slice()).unwrap_or(&[]);
    if let Ok(n) = arg.parse::<usize>() {
        if n >= 1 && n <= related.len() {
            return Some(related[n - 1].clone());
        }
        return None;
    }
    Some(Term::new(arg))
}

fn print_help() {
    println!("commands:");
    println!("  <n> | <term>   navigate to a related term");
    println!("  back           return to the previous center");
    println!("  add <term>     add a custom association to the current center");
    println!("  del <n|term>   hide a term for the current center");
    println!("  list           reprint the current graph");
    println!("  quit           exit");
}

async fn run_explore(
    term: String,
    lang: String,
    endpoint: String,
    max_related: usize,
    han_only: bool,
    db: Option<PathBuf>,
) -> i32 {
    let store: Box<dyn OverrideStore> = match open_store(db) {
        Ok(store) => Box::new(store),
        Err(e) => {
            eprintln!("Warning: {}; edits will not survive a restart", e);
            Box::new(semnet::MemoryOverrideStore::new())
        }
    };

    let source = match ConceptNetSource::with_endpoint(&endpoint, lang) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let options = ReconcileOptions {
        max_related,
        term_filter: if han_only {
            TermFilter::Han
        } else {
            TermFilter::Any
        },
        ..Default::default()
    };

    let mut explorer =
        Explorer::new(Box::new(source), store, options).with_sink(Box::new(TerminalSink));

    if let Err(e) = explorer.set_center(Term::new(term), false).await {
        eprintln!("Error: {}", e);
        return 1;
    }
    print_help();

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (cmd, arg) = line
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((line, ""));

        let result = match cmd {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                Ok(())
            }
            "list" => {
                if let (Some(center), Some(graph)) = (explorer.center(), explorer.graph()) {
                    TerminalSink.graph_updated(center, graph);
                }
                Ok(())
            }
            "back" => {
                if explorer.history_depth() == 0 {
                    println!("nothing to go back to");
                    Ok(())
                } else {
                    explorer.go_back().await.map(|_| ())
                }
            }
            "add" => {
                explorer.begin_add_relation(None);
                match explorer.submit_add_relation(arg).await {
                    Ok(false) => {
                        explorer.cancel_add_relation();
                        println!("usage: add <term>");
                        Ok(())
                    }
                    other => other.map(|_| ()),
                }
            }
            "del" => match resolve_term(&explorer, arg) {
                Some(term) if !arg.is_empty() => {
                    explorer.apply_delete_relation(term).await.map(|_| ())
                }
                _ => {
                    println!("usage: del <n|term>");
                    Ok(())
                }
            },
            _ => match resolve_term(&explorer, line) {
                Some(term) => explorer.activate_node(term).await.map(|_| ()),
                None => {
                    println!("no such entry: {}", line);
                    Ok(())
                }
            },
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }
    0
}

fn cmd_overrides_list(store: &SqliteOverrideStore) -> i32 {
    let centers = store.centers();
    if centers.is_empty() {
        println!("No overrides recorded.");
        return 0;
    }
    for center in centers {
        let entry = store.entry(&center);
        println!("{}", center);
        for term in &entry.added {
            println!("  + {}", term);
        }
        for term in &entry.deleted {
            println!("  - {}", term);
        }
    }
    0
}

fn cmd_overrides_add(store: &mut SqliteOverrideStore, center: &str, term: &str) -> i32 {
    match store.add_relation(&Term::new(center), term) {
        Ok(true) => {
            println!("Added '{}' to '{}'", term.trim(), center);
            0
        }
        Ok(false) => {
            eprintln!("Nothing to do (blank term or already added)");
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_overrides_delete(store: &mut SqliteOverrideStore, center: &str, term: &str) -> i32 {
    match store.delete_relation(&Term::new(center), &Term::new(term)) {
        Ok(true) => {
            println!("Hid '{}' for '{}'", term, center);
            0
        }
        Ok(false) => {
            eprintln!("'{}' is already hidden for '{}'", term, center);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Explore {
            term,
            lang,
            endpoint,
            max_related,
            han_only,
            db,
        } => run_explore(term, lang, endpoint, max_related, han_only, db).await,
        Commands::Overrides { action, db } => {
            let mut store = match open_store(db) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            match action {
                OverrideAction::List => cmd_overrides_list(&store),
                OverrideAction::Add { center, term } => {
                    cmd_overrides_add(&mut store, &center, &term)
                }
                OverrideAction::Delete { center, term } => {
                    cmd_overrides_delete(&mut store, &center, &term)
                }
            }
        }
    };
    std::process::exit(code);
}

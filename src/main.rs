// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use transition_assist::utils::logging::{format_success, format_warning};
use transition_assist::{
    Assistant, ChatClient, Config, Corpus, DocKind, DocumentIndex, JsonExporter, OperationTimer,
    SearchEngine, Validator, tokenize,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "transition_assist")]
#[command(version = "0.1.0")]
#[command(
    about = "Relevance search and grounded assistant for the Solutions Transitions corpus",
    long_about = None
)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank corpus documents against a query
    Search {
        /// Free-text query, French
        query: String,

        #[arg(short, long, value_name = "NUM")]
        top_k: Option<usize>,

        /// Show every scored document instead of the thresholded selection
        #[arg(long)]
        scores: bool,
    },

    /// One-shot grounded answer from the chat model
    Ask {
        /// Question to answer from the corpus
        message: String,
    },

    Stats,

    Export {
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    transition_assist::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Transition Assist");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Search {
            query,
            top_k,
            scores,
        } => {
            cmd_search(&config, &query, top_k, scores)?;
        }
        Commands::Ask { message } => {
            cmd_ask(&config, &message).await?;
        }
        Commands::Stats => {
            cmd_stats(&config)?;
        }
        Commands::Export { output } => {
            cmd_export(&config, output)?;
        }
    }

    Ok(())
}

fn load_engine(config: &Config) -> Result<SearchEngine> {
    Validator::validate_directory(&config.corpus.dir).context("Corpus directory not usable")?;

    let timer = OperationTimer::new("corpus load and index");
    let corpus = Corpus::load(&config.corpus.dir).context("Failed to load corpus")?;
    if corpus.is_empty() {
        warn!("Corpus is empty; every query will come back without results");
    }

    let index = DocumentIndex::build(&corpus);
    timer.finish_with_count(index.len());

    Ok(SearchEngine::new(index, &config.search))
}

fn cmd_search(config: &Config, query: &str, top_k: Option<usize>, scores: bool) -> Result<()> {
    if let Some(k) = top_k {
        Validator::validate_top_k(k).context("Invalid --top-k value")?;
    }

    info!("Searching for: {}", query);
    let engine = load_engine(config)?;

    if scores {
        let matches = engine.scored_matches(query);
        if matches.is_empty() {
            println!("\nNo document scored for: \"{}\"\n", query);
            return Ok(());
        }

        println!(
            "\nScores for: \"{}\" (threshold {})\n",
            query, config.search.min_relevance_score
        );
        for scored in &matches {
            println!("{}", scored.format_summary());
        }
        println!();
        return Ok(());
    }

    let k = top_k.unwrap_or_else(|| engine.default_top_k());
    let result = engine.search(query, k);

    if result.documents.is_empty() {
        println!("\nNo relevant documents for: \"{}\"\n", query);
        println!("Try:");
        println!("  - Naming a theme (budget, énergie, mobilité, biodiversité...)");
        println!("  - Using more specific terms");
        println!("  - Checking the corpus with the stats command");
        return Ok(());
    }

    println!("\nSearch results for: \"{}\"\n", query);
    println!("Found {} document(s)\n", result.documents.len());
    println!("{}", "=".repeat(80));

    for (idx, doc) in result.documents.iter().enumerate() {
        println!("\n{}. [{}] {}", idx + 1, doc.kind.label(), doc.title);
        println!("   URL: {}", doc.url);
        if !doc.summary.is_empty() {
            println!("   {}", Validator::truncate_text(&doc.summary, 120));
        }
    }

    println!("\n{}", "=".repeat(80));
    info!("Search complete");

    Ok(())
}

async fn cmd_ask(config: &Config, message: &str) -> Result<()> {
    let engine = load_engine(config)?;
    let client = ChatClient::new(&config.assistant).context("Chat client setup failed")?;
    let assistant = Assistant::new(engine, client);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Failed to create spinner template"),
    );
    spinner.set_message("Interrogation du modèle...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let reply = assistant.ask(&[], message).await;
    spinner.finish_and_clear();
    let reply = reply.context("Assistant request failed")?;

    if !reply.has_relevant_results {
        println!(
            "{}",
            format_warning("Aucun document pertinent trouvé; réponse d'orientation seulement")
        );
    }

    println!("\n{}\n", reply.answer.trim());

    if !reply.sources.is_empty() {
        println!("Sources:");
        for source in &reply.sources {
            println!(
                "  [{}] {} ({})",
                source.kind.label(),
                source.title,
                source.url
            );
        }
        println!();
    }

    Ok(())
}

fn cmd_stats(config: &Config) -> Result<()> {
    Validator::validate_directory(&config.corpus.dir).context("Corpus directory not usable")?;

    let corpus = Corpus::load(&config.corpus.dir).context("Failed to load corpus")?;
    let index = DocumentIndex::build(&corpus);

    println!("\nCorpus: {}", config.corpus.dir.display());
    println!("{}", "=".repeat(40));
    println!("  fiches      {:>4}", index.count_of(DocKind::Fiche));
    println!("  ressources  {:>4}", index.count_of(DocKind::Ressource));
    println!("  faq         {:>4}", index.count_of(DocKind::Faq));
    println!("  home        {:>4}", index.count_of(DocKind::Home));
    println!("{}", "=".repeat(40));
    println!("  indexed     {:>4}", index.len());

    let body_tokens: usize = index
        .documents()
        .iter()
        .map(|doc| tokenize(&doc.body).len())
        .sum();
    println!("  body tokens {:>4}", body_tokens);
    if !index.is_empty() {
        println!("  avg tokens  {:>4}", body_tokens / index.len());
    }

    let empty_bodies = index
        .documents()
        .iter()
        .filter(|doc| doc.body.is_empty())
        .count();
    if empty_bodies > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} document(s) have an empty body and can never match",
                empty_bodies
            ))
        );
    }

    Ok(())
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| config.export.output_dir.clone());

    Validator::validate_directory(&config.corpus.dir).context("Corpus directory not usable")?;
    let corpus = Corpus::load(&config.corpus.dir).context("Failed to load corpus")?;
    let index = DocumentIndex::build(&corpus);

    let exporter = JsonExporter::new(&output).context("Failed to prepare output directory")?;
    let manifest = exporter.export_documents(index.documents())?;

    println!(
        "{}",
        format_success(&format!(
            "Exported {} document(s) to {}",
            manifest.total_documents,
            output.display()
        ))
    );

    Ok(())
}

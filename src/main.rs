use clap::{Parser, Subcommand};
use std::path::PathBuf;

use resume_ats::config::{self, Config};
use resume_ats::resume::{sample_document, DocumentRepository, JsonFileRepository, ResumeDocument};
use resume_ats::{logging, output, scoring, tui};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DOCUMENT: i32 = 2;
const EXIT_BELOW_THRESHOLD: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the resume and print suggestions (default if no subcommand)
    Score {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also show points per rule
        #[arg(short, long)]
        breakdown: bool,

        /// Exit with status 3 when the score is below this value
        #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u32).range(0..=100))]
        fail_under: Option<u32>,
    },
    /// Live view that rescores whenever the document changes
    Watch,
    /// Write the built-in sample resume to the document path
    Sample {
        /// Overwrite a non-empty document
        #[arg(short, long)]
        force: bool,
    },
    /// Clear the document back to an empty resume
    Reset,
    /// Create a config file interactively
    Init,
    /// Print the resolved document and config paths
    Path,
}

#[derive(Parser, Debug)]
#[command(name = "resume-ats")]
#[command(about = "Resume ATS readiness scorer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/resume-ats/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Resume document to use (defaults to ~/.config/resume-ats/resume.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Score {
        json: false,
        breakdown: false,
        fail_under: None,
    });

    // Init runs before config loading: the config may not exist yet
    if let Commands::Init = command {
        if let Err(e) = config::init::run_init_wizard(cli.config) {
            eprintln!("Init error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let document_path = match config::resolve_document_path(cli.file, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!(path = %document_path.display(), "using resume document");
    let repository = JsonFileRepository::new(&document_path);

    let code = match command {
        Commands::Score {
            json,
            breakdown,
            fail_under,
        } => run_score(&repository, &config, json, breakdown, fail_under),
        Commands::Watch => run_watch(repository, &config).await,
        Commands::Sample { force } => run_sample(&repository, force),
        Commands::Reset => run_save(&repository, &ResumeDocument::default(), "Cleared"),
        Commands::Path => {
            println!("document: {}", document_path.display());
            match cli.config.map(Ok).unwrap_or_else(config::get_config_path) {
                Ok(p) => println!("config:   {}", p.display()),
                Err(e) => println!("config:   unavailable ({:#})", e),
            }
            EXIT_SUCCESS
        }
        Commands::Init => EXIT_SUCCESS,
    };

    std::process::exit(code);
}

fn load_document(repository: &JsonFileRepository) -> Result<ResumeDocument, i32> {
    repository.load().map_err(|e| {
        eprintln!("Document error: {:#}", e);
        EXIT_DOCUMENT
    })
}

fn run_score(
    repository: &JsonFileRepository,
    config: &Config,
    json: bool,
    breakdown: bool,
    fail_under: Option<u32>,
) -> i32 {
    let document = match load_document(repository) {
        Ok(d) => d,
        Err(code) => return code,
    };

    let result = scoring::calculate_score_with(&document, &config.effective_scoring());
    tracing::debug!(
        total = result.total,
        suggestions = result.suggestions.len(),
        "scored document"
    );

    if json {
        match output::format_json(&result) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                return EXIT_DOCUMENT;
            }
        }
    } else {
        let use_colors = output::should_use_colors();
        println!("{}", output::format_report(&result, use_colors));
        if breakdown {
            println!();
            println!("{}", output::format_breakdown(&result, use_colors));
        }
    }

    match fail_under {
        Some(threshold) if result.total < threshold => {
            eprintln!("Score {} is below the required {}", result.total, threshold);
            EXIT_BELOW_THRESHOLD
        }
        _ => EXIT_SUCCESS,
    }
}

async fn run_watch(repository: JsonFileRepository, config: &Config) -> i32 {
    let theme = tui::resolve_theme(config.theme());
    let watch_path = repository.path().to_path_buf();
    let app = tui::App::new(
        Box::new(repository),
        Some(watch_path),
        config.effective_scoring(),
        tui::ThemeColors::for_theme(theme),
    );

    match tui::run_tui(app, config.refresh_interval()).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Terminal error: {:#}", e);
            EXIT_DOCUMENT
        }
    }
}

fn run_sample(repository: &JsonFileRepository, force: bool) -> i32 {
    if !force {
        match load_document(repository) {
            Ok(existing) if !existing.is_empty() => {
                eprintln!(
                    "{} already holds a resume. Use --force to replace it.",
                    repository.path().display()
                );
                return EXIT_DOCUMENT;
            }
            Ok(_) => {}
            Err(code) => return code,
        }
    }
    run_save(repository, &sample_document(), "Wrote sample resume to")
}

fn run_save(repository: &JsonFileRepository, document: &ResumeDocument, verb: &str) -> i32 {
    match repository.save(document) {
        Ok(()) => {
            println!("{} {}", verb, repository.path().display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Document error: {:#}", e);
            EXIT_DOCUMENT
        }
    }
}

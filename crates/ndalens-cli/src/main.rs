//! `ndalens` — terminal front end for the NDA review workflow.
//!
//! Each subcommand drives one screen controller: upload, analyze, feedback,
//! view/download, and the operator's train/test actions.

mod display;
mod prompt;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ndalens_client::{ApiClient, ApiConfig};
use ndalens_core::UploadFile;
use ndalens_screens::{
    AnalysisScreen, FeedbackScreen, Notifier, Phase, QueryCache, Route, TrainingScreen,
    UploadScreen, ViewScreen,
};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ndalens", version, about = "NDA document review client")]
struct Cli {
    /// Review backend base URL.
    #[arg(
        long,
        global = true,
        env = "NDALENS_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    /// Separate host for the training endpoints (defaults to --api-url).
    #[arg(long, global = true, env = "NDALENS_TRAINING_URL")]
    training_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload an NDA document and start a review
    Upload { file: PathBuf },
    /// Show clause suggestions for a document, analyzing it if needed
    Analyze { id: String },
    /// Accept all suggestions and generate the clean document
    Accept { id: String },
    /// Rate and comment each clause suggestion
    Feedback { id: String },
    /// Show the generated clean document
    View { id: String },
    /// Save the clean document to disk
    Download {
        id: String,
        /// Output path (defaults to the original filename)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Retrain the suggestion model from redline documents
    Train {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Run one test inference against the current model
    Test { file: PathBuf },
}

/// Prints notifications where a browser would toast them.
struct TermNotifier;

impl Notifier for TermNotifier {
    fn success(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("ndalens v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    let mut config = ApiConfig::new(cli.api_url);
    if let Some(url) = cli.training_url {
        config = config.with_training_base_url(url);
    }
    let api = ApiClient::new(config);
    let notifier = TermNotifier;
    let mut cache = QueryCache::new();

    match cli.command {
        Command::Upload { file } => upload(&api, &notifier, &file).await,
        Command::Analyze { id } => analyze(&api, &notifier, &mut cache, &id).await,
        Command::Accept { id } => accept(&api, &notifier, &mut cache, &id).await,
        Command::Feedback { id } => feedback(&api, &notifier, &mut cache, &id).await,
        Command::View { id } => view(&api, &notifier, &mut cache, &id).await,
        Command::Download { id, out } => download(&api, &notifier, &mut cache, &id, out).await,
        Command::Train { files } => train(&api, &files).await,
        Command::Test { file } => test(&api, &file).await,
    }
}

async fn upload(api: &ApiClient, notifier: &TermNotifier, path: &Path) -> Result<()> {
    let file = read_upload(path)?;
    let mut screen = UploadScreen::new(api);
    let Some(route) = screen.submit(&file.filename, file.bytes, notifier).await else {
        bail!("upload failed");
    };
    if let Route::Analysis(id) = &route {
        println!("Document id: {id}");
        println!("Next: ndalens analyze {id}");
    }
    Ok(())
}

async fn analyze(
    api: &ApiClient,
    notifier: &TermNotifier,
    cache: &mut QueryCache,
    id: &str,
) -> Result<()> {
    let mut screen = AnalysisScreen::new(api, id);
    screen.load(cache, notifier).await;

    let Some(document) = screen.document.value() else {
        bail!("could not load document {id}");
    };
    display::print_document(document);

    match &screen.analysis {
        Phase::Ready(Some(analysis)) => {
            display::print_clauses(analysis);
            println!();
            println!("Next: ndalens feedback {id}  |  ndalens accept {id}");
        }
        Phase::Ready(None) => {
            println!("Analysis not available yet; run this command again shortly.");
        }
        Phase::Failed(message) => bail!("analysis failed: {message}"),
        _ => {}
    }
    Ok(())
}

async fn accept(
    api: &ApiClient,
    notifier: &TermNotifier,
    cache: &mut QueryCache,
    id: &str,
) -> Result<()> {
    let mut screen = AnalysisScreen::new(api, id);
    screen.load(cache, notifier).await;
    if !screen.can_accept() {
        bail!("no analysis results to accept for document {id}");
    }
    let Some(route) = screen.accept_changes(notifier).await else {
        bail!("clean document creation failed");
    };
    if let Route::View(id) = &route {
        println!("Next: ndalens view {id}");
    }
    Ok(())
}

async fn feedback(
    api: &ApiClient,
    notifier: &TermNotifier,
    cache: &mut QueryCache,
    id: &str,
) -> Result<()> {
    let mut screen = FeedbackScreen::new(api, id);
    screen.load(cache, notifier).await;

    let Some(analysis) = screen.analysis.value().and_then(|a| a.clone()) else {
        bail!("no analysis to give feedback on for document {id}");
    };

    let stdin = std::io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut output = std::io::stdout();
    for (index, clause) in analysis.clauses.iter().enumerate() {
        display::print_clause(index + 1, clause);
        let rating = prompt::prompt_rating(&mut input, &mut output)?;
        if rating > 0 {
            screen.set_rating(clause.id, rating);
        }
        let comment = prompt::prompt_comment(&mut input, &mut output)?;
        if !comment.trim().is_empty() {
            screen.set_comment(clause.id, comment);
        }
        writeln!(output)?;
    }

    if screen.submit(notifier).await.is_none() {
        bail!("feedback submission failed");
    }
    Ok(())
}

async fn view(
    api: &ApiClient,
    notifier: &TermNotifier,
    cache: &mut QueryCache,
    id: &str,
) -> Result<()> {
    let mut screen = ViewScreen::new(api, id);
    screen.load(cache, notifier).await;
    let Some(clean) = screen.clean.value() else {
        bail!("could not load clean document for {id}");
    };
    display::print_clean_document(clean);
    println!();
    println!("Next: ndalens download {id}");
    Ok(())
}

async fn download(
    api: &ApiClient,
    notifier: &TermNotifier,
    cache: &mut QueryCache,
    id: &str,
    out: Option<PathBuf>,
) -> Result<()> {
    let mut screen = ViewScreen::new(api, id);
    screen.load(cache, notifier).await;
    let Some(file) = screen.download(notifier).await else {
        bail!("download failed");
    };
    let path = out.unwrap_or_else(|| PathBuf::from(&file.filename));
    std::fs::write(&path, &file.bytes)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Saved {}", path.display());
    Ok(())
}

async fn train(api: &ApiClient, paths: &[PathBuf]) -> Result<()> {
    let files = paths.iter().map(|p| read_upload(p)).collect::<Result<Vec<_>>>()?;
    let mut screen = TrainingScreen::new(api);
    screen.select_training_files(files);
    println!("Training on {} file(s)...", screen.training_file_count());
    screen.train().await;

    if let Some(status) = &screen.training_status {
        println!("{status}");
        return Ok(());
    }
    bail!(screen.train_error.clone().unwrap_or_else(|| "Training failed".into()))
}

async fn test(api: &ApiClient, path: &Path) -> Result<()> {
    let file = read_upload(path)?;
    let mut screen = TrainingScreen::new(api);
    screen.select_test_file(file);
    screen.test().await;

    if let Some(results) = &screen.test_results {
        display::print_test_results(results);
        return Ok(());
    }
    bail!(screen.test_error.clone().unwrap_or_else(|| "Testing failed".into()))
}

/// Read a local file into an upload, enforcing the `.docx` filter before any
/// request is made.
fn read_upload(path: &Path) -> Result<UploadFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("file name is not valid UTF-8")?;
    Ok(UploadFile::new(filename, bytes)?)
}

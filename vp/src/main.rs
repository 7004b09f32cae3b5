//! Voiceplan - voice memos to triaged task plans
//!
//! CLI entry point: transcription, planning, and saved-plan management.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use planstore::{PlanStore, SavedPlan, StoreError};
use voiceplan::cli::{Cli, Command, OutputFormat};
use voiceplan::config::Config;
use voiceplan::demo;
use voiceplan::domain::{FocusBlock, Priority, Schedule, ScheduleBucket, Task, TaskPlan};
use voiceplan::llm::{self, LlmError};
use voiceplan::pipeline::TaskPipeline;
use voiceplan::prompts::PromptLoader;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voiceplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("voiceplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "Voiceplan loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    match cli.command {
        Command::Transcribe { audio } => cmd_transcribe(&config, &audio).await,
        Command::Plan {
            audio,
            text,
            save,
            title,
            username,
            password,
            format,
        } => cmd_plan(&config, audio, text, save, title, username, password, format).await,
        Command::Demo { format } => cmd_demo(format),
        Command::Register { username, password } => cmd_register(&config, &username, &password),
        Command::Plans {
            username,
            password,
            limit,
            show,
            format,
        } => cmd_plans(&config, &username, &password, limit, show, format),
    }
}

/// Print a gateway failure and exit
///
/// Quota exhaustion is surfaced verbatim - its message already carries the
/// wait-or-check-billing guidance - and is never retried here.
fn fail_gateway(action: &str, err: &LlmError) -> ! {
    match err {
        LlmError::QuotaExceeded { retry_after } => {
            eprintln!("✗ {}", err);
            if let Some(wait) = retry_after {
                eprintln!("  The backend suggests retrying after ~{}s.", wait.as_secs());
            }
        }
        LlmError::Configuration(_) => {
            eprintln!("✗ {}", err);
            eprintln!("  Add `gemini-api-key` to the secrets file or export the API key variable.");
        }
        _ => eprintln!("✗ {} failed: {}", action, err),
    }
    std::process::exit(1);
}

/// Transcribe an audio memo and print the transcript
async fn cmd_transcribe(config: &Config, audio: &Path) -> Result<()> {
    let bytes = fs::read(audio).context(format!("Failed to read audio file {}", audio.display()))?;
    let mime_type = llm::mime_for_path(audio);

    let client = llm::create_client(&config.llm).unwrap_or_else(|e| fail_gateway("Transcription", &e));
    let pipeline = TaskPipeline::new(client, PromptLoader::new());

    match pipeline.transcribe(&bytes, mime_type).await {
        Ok(transcript) => {
            println!("{}", transcript);
            Ok(())
        }
        Err(e) => fail_gateway("Transcription", &e),
    }
}

/// Build (and optionally save) a task plan
#[allow(clippy::too_many_arguments)]
async fn cmd_plan(
    config: &Config,
    audio: Option<PathBuf>,
    text: Option<String>,
    save: bool,
    title: Option<String>,
    username: Option<String>,
    password: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let client = llm::create_client(&config.llm).unwrap_or_else(|e| fail_gateway("Planning", &e));
    let pipeline = TaskPipeline::new(client, PromptLoader::new());

    let transcript = match (audio, text) {
        (Some(path), _) => {
            let bytes = fs::read(&path).context(format!("Failed to read audio file {}", path.display()))?;
            eprintln!("Transcribing {}...", path.display());
            match pipeline.transcribe(&bytes, llm::mime_for_path(&path)).await {
                Ok(transcript) => transcript,
                Err(e) => fail_gateway("Transcription", &e),
            }
        }
        (None, Some(text)) => text,
        (None, None) => read_stdin_note()?,
    };

    if transcript.trim().is_empty() {
        println!("Add some text first, or transcribe audio.");
        return Ok(());
    }

    let plan = match pipeline.run(&transcript).await {
        Ok(plan) => plan,
        Err(e) => fail_gateway("Task extraction", &e),
    };

    if plan.is_empty() {
        println!("No actionable tasks detected. Try adding more concrete actions or clearer phrasing.");
        return Ok(());
    }

    render_plan(&plan, format)?;

    if save
        && let (Some(username), Some(password)) = (username, password)
    {
        save_plan(config, &username, &password, title.as_deref(), &plan)?;
    }

    Ok(())
}

/// Print the built-in demo plan
fn cmd_demo(format: OutputFormat) -> Result<()> {
    render_plan(&demo::demo_plan(), format)
}

/// Register a new account
fn cmd_register(config: &Config, username: &str, password: &str) -> Result<()> {
    let store = PlanStore::open(&config.storage.db_path)?;

    match store.create_account(username, password) {
        Ok(account) => {
            println!("Registration successful. You can now save plans as {}.", account.username);
            Ok(())
        }
        Err(StoreError::DuplicateUsername(_)) => {
            eprintln!("Username already exists");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// List recent saved plans, or re-render one by id
fn cmd_plans(
    config: &Config,
    username: &str,
    password: &str,
    limit: Option<usize>,
    show: Option<i64>,
    format: OutputFormat,
) -> Result<()> {
    let store = PlanStore::open(&config.storage.db_path)?;

    let Some(account) = store.authenticate(username, password)? else {
        eprintln!("Invalid username or password");
        std::process::exit(1);
    };

    if let Some(plan_id) = show {
        let Some(saved) = store.get_plan(account.id, plan_id)? else {
            eprintln!("No saved plan {} for this account", plan_id);
            std::process::exit(1);
        };

        match load_plan(&saved) {
            Ok(plan) => render_plan(&plan, format)?,
            Err(e) if e.is_corrupted() => {
                // Per-plan failure: report and leave everything else alone.
                println!("Unable to load this saved plan; the stored data is corrupted.");
            }
            Err(e) => return Err(e.into()),
        }
        return Ok(());
    }

    let limit = limit.unwrap_or(config.storage.list_limit);
    let plans = store.list_recent(account.id, limit)?;

    if plans.is_empty() {
        println!("No saved plans yet.");
        return Ok(());
    }

    for plan in &plans {
        println!(
            "{:>4}  {}  {}",
            plan.id,
            plan.created_at.format("%Y-%m-%d %H:%M"),
            plan.title
        );
    }
    Ok(())
}

/// Authenticate and persist a finished plan
fn save_plan(config: &Config, username: &str, password: &str, title: Option<&str>, plan: &TaskPlan) -> Result<()> {
    let store = PlanStore::open(&config.storage.db_path)?;

    let Some(account) = store.authenticate(username, password)? else {
        eprintln!("Invalid username or password");
        std::process::exit(1);
    };

    let saved = store.save_plan(
        account.id,
        title,
        &plan.transcript,
        &plan.tasks,
        // The prioritized artifact mirrors the task list; both columns are
        // kept for storage-format compatibility.
        &plan.tasks,
        &plan.schedule,
        &plan.blocks,
    )?;

    println!("Saved plan as \"{}\".", saved.title);
    Ok(())
}

/// Decode a saved plan's artifacts back into a renderable plan
fn load_plan(saved: &SavedPlan) -> Result<TaskPlan, StoreError> {
    let artifacts = saved.artifacts()?;

    let tasks: Vec<Task> = serde_json::from_value(artifacts.tasks).map_err(|_| StoreError::Corrupted(saved.id))?;
    let schedule: Schedule =
        serde_json::from_value(artifacts.schedule).map_err(|_| StoreError::Corrupted(saved.id))?;
    let blocks: Vec<FocusBlock> =
        serde_json::from_value(artifacts.blocks).map_err(|_| StoreError::Corrupted(saved.id))?;

    Ok(TaskPlan {
        transcript: saved.transcript.clone(),
        tasks,
        schedule,
        blocks,
    })
}

fn read_stdin_note() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read note text from stdin")?;
    Ok(buffer)
}

fn render_plan(plan: &TaskPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(plan)?),
        OutputFormat::Text => render_plan_text(plan),
    }
    Ok(())
}

fn render_plan_text(plan: &TaskPlan) {
    println!("{}", "To-Do List".bold());
    for task in &plan.tasks {
        let mark = if task.done { "x" } else { " " };
        println!("  [{}] {}", mark, task.text);
    }

    println!();
    println!("{}", "Scheduled Tasks".bold());
    for bucket in ScheduleBucket::ALL {
        let tasks = plan.schedule.bucket(bucket);
        if tasks.is_empty() {
            continue;
        }
        println!("  {}", bucket.to_string().underline());
        for task in tasks {
            println!("    {}  ({} • {} • {})", task.text, task.category, task.priority, task.load);
        }
    }

    println!();
    println!("{}", "Eisenhower Matrix".bold());
    for priority in Priority::ALL {
        println!("  {}", priority.to_string().underline());
        let quadrant: Vec<&Task> = plan.tasks.iter().filter(|task| task.priority == priority).collect();
        if quadrant.is_empty() {
            println!("    {}", "No tasks yet".dimmed());
        }
        for task in quadrant {
            println!("    - {} ({} • {})", task.text, task.category, task.load);
        }
    }

    println!();
    println!("{}", "Focus Blocks".bold());
    for block in &plan.blocks {
        println!("  {}", block.kind.to_string().underline());
        for task in &block.tasks {
            println!("    - {}", task.text);
        }
    }
}

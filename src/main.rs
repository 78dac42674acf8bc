use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use facultyhub::api::ApiClient;
use facultyhub::facultyhub_config::{ApiConfig, LogConfig};
use facultyhub::facultyhub_core::Operation;
use facultyhub::facultyhub_models::{GradeType, LevelId, Semester};
use facultyhub::logging::init_tracing;
use facultyhub::modules::hierarchy::{Flow, Navigator, Target};
use tracing::{info, warn};

mod cli;

#[derive(Parser)]
#[command(name = "facultyhub")]
#[command(about = "FacultyHub - Terminal client for the faculty academic backend", long_about = None)]
struct Cli {
    /// Backend origin (overrides FACULTYHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token (overrides FACULTYHUB_API_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drill down from departments to students or subjects
    Browse {
        /// What the last step lists
        #[arg(long, value_enum, default_value = "students")]
        list: BrowseTarget,

        /// Semester of the subject catalog (1 or 2)
        #[arg(long, default_value = "1")]
        semester: u8,
    },
    /// Assign a doctor to a subject
    Assign,
    /// Upload an exam grade sheet for a level
    UploadGrades {
        /// Spreadsheet to upload
        #[arg(short = 'f', long)]
        file: PathBuf,

        /// midterm or final
        #[arg(short = 't', long, default_value = "midterm")]
        grade_type: GradeType,
    },
    /// List uploaded grades waiting for approval
    PendingGrades,
    /// Approve the pending grades of a level
    ApproveGrades {
        /// Level to approve (prompted from the pending list if omitted)
        #[arg(short = 'l', long)]
        level_id: Option<LevelId>,
    },
    /// Check a grading template's weights without saving it
    CheckTemplate {
        #[arg(long, default_value = "قالب")]
        name: String,
        #[arg(long, default_value = "10")]
        attendance: u32,
        #[arg(long, default_value = "10")]
        quizzes: u32,
        #[arg(long, default_value = "10")]
        coursework: u32,
        #[arg(long, default_value = "20")]
        midterm: u32,
        #[arg(long = "final", default_value = "50")]
        final_exam: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BrowseTarget {
    Students,
    Subjects,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    if let Err(e) = init_tracing(&LogConfig::from_env()) {
        eprintln!("⚠️  Failed to set up file logging: {}", e);
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::CheckTemplate {
        name,
        attendance,
        quizzes,
        coursework,
        midterm,
        final_exam,
    } = &cli.command
    {
        return cli::templates::check(name, [*attendance, *quizzes, *coursework, *midterm, *final_exam]);
    }

    let client = connect(cli.api_url, cli.token).await?;

    match cli.command {
        Commands::Browse { list, semester } => {
            let (target, flow) = match list {
                BrowseTarget::Students => (Target::Students, Flow::StudentRoster),
                BrowseTarget::Subjects => {
                    let semester = Semester::from_number(semester)
                        .context("Semester must be 1 or 2")?;
                    (Target::Subjects { semester }, Flow::SubjectCatalog)
                }
            };
            cli::browse::run(&client, Navigator::new(target, flow.entry_levels())).await
        }
        Commands::Assign => cli::assign::run(&client).await,
        Commands::UploadGrades { file, grade_type } => {
            cli::grades::upload(&client, grade_type, &file).await
        }
        Commands::PendingGrades => cli::grades::pending(&client).await,
        Commands::ApproveGrades { level_id } => cli::grades::approve(&client, level_id).await,
        Commands::CheckTemplate { .. } => Ok(()),
    }
}

async fn connect(api_url: Option<String>, token: Option<String>) -> Result<ApiClient> {
    let mut config = ApiConfig::from_env();
    if let Some(url) = api_url {
        config.base_url = ApiConfig::for_base_url(&url).base_url;
    }
    if let Some(token) = token {
        config = config.with_token(token);
    }
    info!(?config, "Connecting");

    let client = ApiClient::from_config(config).context("Failed to build HTTP client")?;
    if client.session().token().is_none() {
        warn!("No API token configured, requests are sent anonymously");
        return Ok(client);
    }

    match client.establish_session().await {
        Ok(user) => info!(user = %user.display_name(), role = ?user.role, "Session established"),
        Err(e) => {
            warn!(error = %e, "Continuing without a validated session");
            eprintln!("⚠️  {}", e.user_message(Operation::ValidateSession));
        }
    }
    Ok(client)
}

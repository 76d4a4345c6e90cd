use clap::{Parser, Subcommand};
use netsec_portal::analysis::DEFAULT_API_BASE;
use netsec_portal::{
    AnalysisPipeline, AnalysisSession, ClassifierClient, ClassifierConfig, HttpClassifierClient,
    SubmitOutcome,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netsec", version, about = "NetSec Threat Portal CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Soumet un texte ou un fichier au classifieur de menaces
    Analyze {
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value = DEFAULT_API_BASE)]
        api_base: String,
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
    /// Interroge l'état de santé du classifieur
    Health {
        #[arg(long, default_value = DEFAULT_API_BASE)]
        api_base: String,
        #[arg(long, default_value_t = 5)]
        timeout_secs: u64,
    },
    /// Affiche les panneaux statiques du tableau de bord
    Dashboard,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Analyze {
            text,
            file,
            api_base,
            timeout_secs,
        } => {
            let config =
                ClassifierConfig::new(api_base).with_timeout(Duration::from_secs(timeout_secs));
            let classifier = HttpClassifierClient::new(config)?;
            let pipeline = AnalysisPipeline::new(Arc::new(classifier));
            let session = AnalysisSession::new();

            let outcome = match (text, file) {
                (Some(text), None) => pipeline.submit(&session, &text),
                (None, Some(file)) => pipeline.submit_file(&session, &file)?,
                _ => anyhow::bail!("fournir --text ou --file"),
            };

            match outcome {
                SubmitOutcome::Completed(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                SubmitOutcome::Ignored => {
                    warn!("entrée vide, aucune analyse lancée");
                }
                SubmitOutcome::Busy => {
                    error!("analyse déjà en cours");
                }
            }
        }
        Commands::Health {
            api_base,
            timeout_secs,
        } => {
            let config =
                ClassifierConfig::new(api_base).with_timeout(Duration::from_secs(timeout_secs));
            let classifier = HttpClassifierClient::new(config)?;
            match classifier.health() {
                Ok(status) => println!("{}", serde_json::to_string_pretty(&status)?),
                Err(error) => error!(%error, "classifieur indisponible"),
            }
        }
        Commands::Dashboard => {
            println!(
                "{}",
                serde_json::to_string_pretty(&netsec_portal::dashboard::snapshot())?
            );
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::cli::{FieldArgs, submit::SubmitOverrides};
use std::process::ExitCode;

/// folio - portfolio contact form
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Validate and submit the portfolio contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the fields without submitting
    Validate {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Fill in the form and submit it through the simulated endpoint
    Submit {
        #[command(flatten)]
        fields: FieldArgs,

        /// Simulated latency in milliseconds (overrides config file)
        #[arg(long)]
        latency_ms: Option<u64>,

        /// Probability of a successful delivery (overrides config file)
        #[arg(long)]
        success_rate: Option<f64>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = folio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let success = match cli.command {
        Commands::Validate { fields } => {
            folio::cli::validate::validate(&fields.into()).is_valid()
        }
        Commands::Submit {
            fields,
            latency_ms,
            success_rate,
        } => {
            folio::cli::submit::submit(
                &config,
                fields.into(),
                SubmitOverrides {
                    latency_ms,
                    success_rate,
                },
            )
            .await?
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

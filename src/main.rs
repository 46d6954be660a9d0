use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{error, info, warn};

mod config;

use config::Config;
use live_scoreboard::script::{render_summary, Outcome, ScriptRunner};
use live_scoreboard::Scoreboard;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    config.validate()?;
    let format = config.output_format();

    let input: Box<dyn AsyncRead + Unpin + Send> = match &config.script {
        Some(path) => {
            info!("Running script {}", path.display());
            Box::new(tokio::fs::File::open(path).await?)
        }
        None => {
            info!("Reading commands from stdin");
            Box::new(tokio::io::stdin())
        }
    };

    let mut runner = ScriptRunner::new(Scoreboard::new());
    let mut lines = BufReader::new(input).lines();
    let mut line_no = 0usize;
    let mut failures = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        match runner.execute(line_no, &line) {
            Ok(Some(Outcome::Summary(summary))) => {
                println!("{}", render_summary(&summary, format)?);
            }
            Ok(Some(Outcome::Started { label, id })) => {
                info!("Started '{}' as {}", label, id);
            }
            Ok(_) => {}
            Err(e) if config.fail_fast => {
                error!("{}", e);
                return Err(e.into());
            }
            Err(e) => {
                failures += 1;
                warn!("{}", e);
            }
        }
    }

    info!(
        "Processed {} line(s), {} failed, {} match(es) still live",
        line_no,
        failures,
        runner.board().len()
    );

    Ok(())
}

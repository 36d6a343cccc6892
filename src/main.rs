use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payment_authorizer::application::processor::PaymentProcessor;
use payment_authorizer::domain::ports::{AcquirerBox, TransactionLedgerBox};
use payment_authorizer::infrastructure::acquirer::SimulatedAcquirer;
use payment_authorizer::infrastructure::in_memory::InMemoryLedger;
use payment_authorizer::interfaces::csv::request_reader::RequestReader;
use payment_authorizer::interfaces::csv::result_writer::{BatchResult, ResultWriter};
use payment_authorizer::interfaces::http::{AppState, create_router};
use payment_authorizer::logging::{self, LogFormat};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tokio::signal;

#[derive(Parser)]
#[command(author, version, about = "Card payment authorization simulator", long_about = None)]
struct Cli {
    /// Log output format.
    #[arg(long, global = true, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Server options used when no subcommand is given.
    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, PartialEq)]
struct ServeArgs {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Serve the authorization API over HTTP (the default).
    Serve(ServeArgs),
    /// Authorize every charge request in a CSV file and print the results.
    Batch {
        /// Input CSV with cardNumber,expiryDate,cvv,amount,currency,merchantId columns
        input: PathBuf,
    },
}

fn build_processor() -> PaymentProcessor {
    let ledger: TransactionLedgerBox = Box::new(InMemoryLedger::new());
    let acquirer: AcquirerBox = Box::new(SimulatedAcquirer::new());
    PaymentProcessor::new(ledger, acquirer)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(logging::DEFAULT_FILTER, cli.log_format);

    match cli.command {
        None => serve(cli.serve).await,
        Some(Commands::Serve(args)) => serve(args).await,
        Some(Commands::Batch { input }) => batch(input).await,
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let router = create_router(AppState::new(build_processor()));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.into_diagnostic()?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("server stopped");
    Ok(())
}

async fn batch(input: PathBuf) -> Result<()> {
    let processor = build_processor();

    let file = File::open(&input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    for (index, request) in reader.requests()?.enumerate() {
        let row = index + 1;
        match request {
            Ok(tx) => {
                let outcome = processor.process(tx).await;
                writer.write_result(&BatchResult::from_outcome(row, outcome))?;
            }
            Err(e) => {
                eprintln!("Error reading request at row {}: {}", row, e);
            }
        }
    }
    writer.flush()?;

    tracing::info!(
        recorded = processor.recorded().await?,
        input = %input.display(),
        "batch complete"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_serves() {
        let cli = Cli::try_parse_from(["payment-authorizer", "--host", "127.0.0.1", "--port", "9000"])
            .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(
            cli.serve,
            ServeArgs {
                host: "127.0.0.1".to_string(),
                port: 9000,
            }
        );
    }

    #[test]
    fn test_explicit_serve_subcommand() {
        let cli = Cli::try_parse_from(["payment-authorizer", "serve", "--port", "3000"]).unwrap();

        match cli.command {
            Some(Commands::Serve(args)) => assert_eq!(args.port, 3000),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_batch_subcommand() {
        let cli = Cli::try_parse_from(["payment-authorizer", "batch", "charges.csv"]).unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Batch {
                input: PathBuf::from("charges.csv"),
            })
        );
    }
}

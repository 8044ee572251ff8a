//! qabot CLI and web UI entry point.
//!
//! Binary name: `qabot`
//!
//! Parses CLI arguments, initializes the database and services, then
//! dispatches to the appropriate command or starts the web UI server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use qabot_core::generation::client::GenerationClient;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise verbosity picks the filter
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,qabot_core=debug,qabot_infra=debug,qabot_api=debug,tower_http=debug",
        _ => "trace",
    };

    qabot_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "qabot", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (config, DB, services)
    let state = AppState::init().await?;

    let result = run(&cli, state.clone()).await;

    state.shutdown().await;
    qabot_observe::tracing_setup::shutdown_tracing();

    result
}

async fn run(cli: &Cli, state: AppState) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Ask { question } => {
            cli::ask::ask(&state, question, cli.json).await?;
        }

        Commands::Config => {
            cli::config::show_config(&state, cli.json)?;
        }

        Commands::Serve { port, host } => {
            let host = host.clone().unwrap_or_else(|| state.config().host.clone());
            let port = port.unwrap_or(state.config().port);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            let client = state.qa_service.client();
            tracing::info!(%addr, client = client.name(), endpoint = client.endpoint(), "web UI listening");
            if !cli.quiet {
                println!(
                    "  {} Question Answer Bot listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } => unreachable!("handled before state init"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
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
}

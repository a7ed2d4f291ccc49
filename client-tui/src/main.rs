use clap::Parser;
use client_tui::state::App;
use client_tui::{config, ui};
use search_client::BackendClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Terminal client for the fenseek position search service.
#[derive(Parser, Debug)]
#[command(name = "fenseek", version)]
struct Args {
    /// Backend base URL (overrides FENSEEK_SERVER_URL).
    #[arg(long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set up tracing with file output in the logs directory; the terminal
    // itself belongs to the UI.
    let log_dir = config::log_dir();
    std::fs::create_dir_all(&log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&log_dir, "fenseek");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server = args.server.unwrap_or_else(config::server_url);
    tracing::info!(%server, "fenseek client starting up");

    let client = BackendClient::new(&server)?;
    let mut app = App::new(Box::new(client));
    app.refresh_auth().await;

    ui::run_app(&mut app).await?;

    tracing::info!("fenseek client shutting down");
    Ok(())
}

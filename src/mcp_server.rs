use std::process;

#[tokio::main]
async fn main() {
    // stdout carries the JSON-RPC transport, so logs must stay on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = pr_style::mcp::serve().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

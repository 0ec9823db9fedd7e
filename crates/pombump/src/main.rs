use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = pombump_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

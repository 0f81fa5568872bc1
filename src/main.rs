use logsheet::commands::Cli;
use logsheet::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("logsheet=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    if is_debug_mode() {
        init_tracing();
    }

    if let Err(e) = Cli::menu().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

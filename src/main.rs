use clap::Parser;
use dotenvy::dotenv;
use gradeterm::app;
use gradeterm::logging;
use gradeterm::prompt::TerminalPrompt;
use gradeterm_client::ApiClient;
use gradeterm_config::ApiConfig;

#[derive(Parser)]
#[command(name = "gradeterm")]
#[command(about = "Gradeterm - Terminal client for the Grade Entry System", long_about = None)]
struct Cli {
    /// Base URL of the backend API (overrides GRADETERM_API_URL)
    #[arg(short = 'u', long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(url) = cli.url {
        config = config.with_base_url(url);
    }

    let client = ApiClient::new(config.base_url);
    let mut prompt = TerminalPrompt;

    match app::run(&client, &mut prompt).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use gate::Gate;
use llm::OllamaClient;
use memory::{Bounds, HistoryStore};
use relay_server::{AppState, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, env = "RELAY_ADDR", default_value = "127.0.0.1:3000")]
    addr: String,
    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    ollama_url: String,
    /// Chat model to request completions from
    #[arg(long, env = "OLLAMA_MODEL", default_value = "llama3.2")]
    model: String,
    /// User/assistant pairs retained per user
    #[arg(long, env = "MAX_TURN_PAIRS", default_value_t = 6)]
    max_turn_pairs: usize,
    /// Characters of history retained per user
    #[arg(long, env = "MAX_CHARS", default_value_t = 4000)]
    max_chars: usize,
    /// Longest prompt the gate lets through
    #[arg(long, env = "MAX_PROMPT_LEN", default_value_t = 2000)]
    max_prompt_len: usize,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let chatter = OllamaClient::new(&cli.ollama_url, &cli.model)?;
    let state = AppState {
        store: Arc::new(HistoryStore::new(Bounds {
            max_turn_pairs: cli.max_turn_pairs,
            max_chars: cli.max_chars,
        })),
        gate: Arc::new(Gate::new(cli.max_prompt_len, Gate::default_patterns())),
        chatter: Arc::new(chatter),
    };
    let app = router(state);

    let addr: SocketAddr = cli.addr.parse()?;
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

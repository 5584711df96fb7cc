use clap::Parser;
use quizdrill::db::Db;
use quizdrill::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL, e.g. `sqlite:quizdrill.db`.
    #[clap(env, default_value = "sqlite:quizdrill.db")]
    database_url: String,

    /// JSON file to seed the question bank from before serving.
    #[arg(long, env)]
    questions: Option<std::path::PathBuf>,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tracing=info,quizdrill=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    if let Some(path) = args.questions {
        let raw = std::fs::read_to_string(&path)?;
        let questions: quizdrill::models::Questions = serde_json::from_str(&raw)?;
        let loaded = db.load_questions(questions).await?;
        tracing::info!("seeded {loaded} questions from {}", path.display());
    }

    let app = quizdrill::router(AppState { db });

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}

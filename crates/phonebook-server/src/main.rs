use clap::Parser;
use phonebook_core::config;
use phonebook_core::registry::Phonebook;
use phonebook_server::api::create_router;
use phonebook_server::api::handlers::AppState;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phonebook-server", about = "Phonebook JSON API server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Directory of static assets served for unmatched paths
    #[arg(long, default_value = config::DEFAULT_STATIC_DIR)]
    static_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "phonebook_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "phonebook_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    let state = AppState {
        phonebook: Phonebook::with_seed_contacts(),
    };
    let app = create_router(state, &args.static_dir);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    tracing::info!(port = args.port, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

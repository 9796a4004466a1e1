use reqecho::config::{self, ServerConfig};
use reqecho::handlers::{invoke_from, invoke_from_path};
use reqecho::routes::build_router;
use reqecho::EchoError;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

async fn start_server(config: ServerConfig) {
    let addr: SocketAddr = match config.addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(&config);
    tracing::info!(%addr, body_limit = config.body_limit, "Starting request echo server");
    println!("{} {}", yansi::Paint::new("Echo server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

async fn invoke(event: Option<PathBuf>) -> Result<String, EchoError> {
    match event {
        Some(path) => invoke_from_path(path).await,
        None => invoke_from(tokio::io::stdin()).await,
    }
}

#[derive(Parser)]
#[command(
    name = "reqecho",
    author,
    version,
    about = "Echo HTTP requests back as JSON",
    long_about = r#"reqecho answers every request with a JSON description of what it received: method, query parameters, headers and the body.

JSON bodies are parsed, form-urlencoded bodies are decoded into a map (repeated keys become lists) and any other body is returned as text. Put it behind a gateway or proxy to check what actually gets forwarded.

Examples:
  1) Run the server:
      reqecho serve --host 0.0.0.0 --port 8080
  2) Echo an API Gateway proxy event:
      reqecho invoke --event event.json
"#,
    after_help = "Use `reqecho <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the echo server
    Serve {
        /// Host to bind to (defaults to REQECHO_HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to REQECHO_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Maximum request body size in bytes
        #[arg(long)]
        body_limit: Option<usize>,
    },
    /// Echo a single API Gateway proxy event
    #[command(about = "Echo an API Gateway proxy event", long_about = "Read an API Gateway proxy integration event (JSON) from a file or stdin and print the proxy response that echoes it.")]
    Invoke {
        /// Event file; reads stdin when omitted
        #[arg(long)]
        event: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Serve by default
    match cli.command {
        None => {
            config::load_env_file(None);
            start_server(ServerConfig::from_env()).await;
        }
        Some(Commands::Serve { host, port, env_file, body_limit }) => {
            config::load_env_file(env_file.as_deref());
            let config = ServerConfig::from_env().with_overrides(host, port, body_limit);
            start_server(config).await;
        }
        Some(Commands::Invoke { event }) => match invoke(event).await {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("{}: {}", yansi::Paint::new("Invocation failed").red(), e);
                process::exit(1);
            }
        },
    }
}

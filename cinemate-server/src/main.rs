use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use cinemate_core::database::DatabaseContext;
use cinemate_core::domain::users::auth::{AuthCrypto, AuthenticationService};
use cinemate_core::types::ids::UserID;
use cinemate_server::{
    AppState,
    infra::config::{Config, ConfigLoad, ConfigLoader},
    routes::create_app,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "cinemate-server")]
#[command(about = "TV-series catalog server: browsing, seasons, episodes and favorites")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
    #[command(subcommand)]
    User(UserCommand),
    #[command(subcommand)]
    Token(TokenCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply database migrations and exit
    Migrate,
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Create a user account and print its id
    Create {
        #[arg(long)]
        username: String,
    },
}

#[derive(Debug, Subcommand)]
enum TokenCommand {
    /// Issue a bearer session for an existing user and print the token
    Issue {
        #[arg(long)]
        user: Uuid,

        /// Session lifetime, e.g. `7d` or `12h` (defaults to AUTH_SESSION_TTL)
        #[arg(long)]
        ttl: Option<humantime::Duration>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_runtime_config(&cli.serve)?;

    match cli.command {
        Some(Command::Db(DbCommand::Migrate)) => run_db_migrate(&config).await,
        Some(Command::User(UserCommand::Create { username })) => {
            run_user_create(&config, &username).await
        }
        Some(Command::Token(TokenCommand::Issue { user, ttl })) => {
            run_token_issue(&config, UserID::from_uuid(user), ttl).await
        }
        None => run_server(config).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "loaded configuration file");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    Ok(config)
}

async fn connect_database(config: &Config) -> anyhow::Result<DatabaseContext> {
    let url = config
        .database
        .url
        .as_deref()
        .context("DATABASE_URL must be set")?;
    DatabaseContext::connect_postgres(url, config.database.max_connections)
        .await
        .context("failed to connect to PostgreSQL")
}

async fn run_db_migrate(config: &Config) -> anyhow::Result<()> {
    let context = connect_database(config).await?;
    context
        .postgres()
        .initialize_schema()
        .await
        .context("database migration failed")?;
    info!("Database migrations applied successfully");
    Ok(())
}

async fn run_user_create(config: &Config, username: &str) -> anyhow::Result<()> {
    let username = username.trim();
    anyhow::ensure!(!username.is_empty(), "username must not be empty");

    let context = connect_database(config).await?;
    let user = context
        .unit_of_work()
        .users
        .create_user(username)
        .await
        .context("failed to create user")?;

    println!("{}", user.id);
    Ok(())
}

async fn run_token_issue(
    config: &Config,
    user_id: UserID,
    ttl: Option<humantime::Duration>,
) -> anyhow::Result<()> {
    let lifetime = ttl.map(Into::into).unwrap_or(config.auth.session_ttl);
    let lifetime = chrono::Duration::from_std(lifetime)
        .context("session lifetime is out of range")?;

    let context = connect_database(config).await?;
    let unit_of_work = context.unit_of_work();
    let auth = AuthenticationService::new(
        Arc::new(AuthCrypto::new(&config.auth.token_key)?),
        Arc::clone(&unit_of_work.sessions),
        Arc::clone(&unit_of_work.users),
    );

    let issued = auth
        .issue_session(user_id, lifetime)
        .await
        .context("failed to issue session")?;

    info!(session_id = %issued.session_id, expires_at = %issued.expires_at, "session issued");
    println!("{}", issued.token);
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let context = connect_database(&config).await?;
    context
        .postgres()
        .initialize_schema()
        .await
        .context("database migration failed")?;

    let crypto = Arc::new(
        AuthCrypto::new(&config.auth.token_key)
            .context("invalid AUTH_TOKEN_KEY")?,
    );
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;

    let state = AppState::new(context.unit_of_work(), Arc::new(config), crypto);
    let app = create_app(state);

    info!("Starting Cinemate server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

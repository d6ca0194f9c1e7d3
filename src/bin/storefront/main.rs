use actix_session::{config::PersistentSession, storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer};
use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::{distributions::Alphanumeric, Rng};
use std::time::Duration;
use storefront::db::{get_db_pool, init_db, init_schema};
use storefront::middleware::ClientCtx;
use storefront::orm::users::Role;

#[derive(Parser)]
#[command(name = "storefront", about = "Small e-commerce web application")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Create the database tables and seed data, dropping anything existing
    InitDb,
    /// Create a user account
    CreateUser {
        username: String,
        password: String,
        /// "admin" or "user"
        #[arg(long, default_value = "user")]
        role: String,
    },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_lib_mods();
    init_our_mods();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| storefront::app_config::database().url);
    init_db(database_url).await;

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::InitDb => {
            init_schema(get_db_pool()).await?;
            println!("Database initialized.");
            Ok(())
        }
        Command::CreateUser {
            username,
            password,
            role,
        } => {
            let role = match role.as_str() {
                "admin" => Role::Admin,
                "user" => Role::User,
                other => anyhow::bail!("unknown role '{}', expected 'admin' or 'user'", other),
            };
            let user = storefront::user::create_user(get_db_pool(), &username, &password, role)
                .await?;
            println!("User '{}' created with id {}.", user.username, user.id);
            Ok(())
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let secret_key = match std::env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(err) => {
            let random_string: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(128)
                .map(char::from)
                .collect();
            log::warn!("SECRET_KEY was invalid. Reason: {:?}\r\nThis means the key used for signing session cookies will invalidate every time the application is restarted. A secret key must be at least 64 bytes to be accepted.\r\n\r\nNeed a key? How about:\r\n{}", err, random_string);
            Key::from(random_string.as_bytes())
        }
    };

    // Spawn session cleanup task
    actix_web::rt::spawn(async {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(300)); // Every 5 minutes
        loop {
            interval.tick().await;
            storefront::session::expire_sessions(storefront::session::get_sess());
            log::debug!("Session cleanup completed");
        }
    });

    let bind_addr = storefront::app_config::server().bind_addr;
    log::info!("Listening on {}", bind_addr);

    HttpServer::new(move || {
        // Order of middleware IS IMPORTANT and is in REVERSE EXECUTION ORDER.
        App::new()
            // Security headers - applied to all responses
            .wrap(
                DefaultHeaders::new()
                    .add((header::X_FRAME_OPTIONS, "DENY"))
                    .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .wrap(ClientCtx::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_same_site(SameSite::Lax)
                    .cookie_secure(false) // Allow HTTP for development
                    .session_lifecycle(PersistentSession::default())
                    .build(),
            )
            .wrap(Logger::new("%a %{User-Agent}i"))
            .configure(storefront::web::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}

/// Initialize third party crates we rely on but don't have control over.
fn init_lib_mods() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Initialize all local mods.
fn init_our_mods() {
    // Each module should work mostly independent of others.
    // This way, we can unit test individual modules without loading the entire application.
    storefront::app_config::init();
    storefront::session::init();
}

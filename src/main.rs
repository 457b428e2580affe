//! Interactive dev harness.
//!
//! Drives the dialogue engine from a terminal: `/start` opens the group
//! picker, plain text is handled as a message, and pasting a callback
//! token (as printed next to each button) simulates pressing that button.
//! `/user <id>` switches the acting user so admin flows can be exercised.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use groupdesk::adapters::memory::{
    InMemoryGroupRepository, InMemoryRequestRepository, InMemorySessionStore,
    InMemoryUserRepository,
};
use groupdesk::adapters::postgres::{
    PostgresGroupRepository, PostgresRequestRepository, PostgresUserRepository,
};
use groupdesk::adapters::transport::ConsoleTransport;
use groupdesk::application::{DialogueEngine, DirectiveDispatcher, RegistryResolver, RequestLedger};
use groupdesk::config::AppConfig;
use groupdesk::domain::dialogue::CallbackToken;
use groupdesk::domain::foundation::{ChatId, UserId};
use groupdesk::domain::user::Role;
use groupdesk::ports::{GroupRepository, RequestRepository, UserRepository};

const SEED_GROUPS: &[&str] = &[
    "Biology", "Chemistry", "CS101", "CS102", "History", "Literature", "Math101", "Math102",
    "Physics", "Robotics",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groupdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let (groups, requests, users): (
        Arc<dyn GroupRepository>,
        Arc<dyn RequestRepository>,
        Arc<dyn UserRepository>,
    ) = if config.database.is_configured() {
        tracing::info!("using postgres storage");
        let pool = PgPoolOptions::new()
            .min_connections(config.database.min_connections)
            .max_connections(config.database.max_connections)
            .acquire_timeout(config.database.acquire_timeout())
            .connect(&config.database.url)
            .await?;
        (
            Arc::new(PostgresGroupRepository::new(pool.clone())),
            Arc::new(PostgresRequestRepository::new(pool.clone())),
            Arc::new(PostgresUserRepository::new(pool)),
        )
    } else {
        tracing::info!("no database configured, using seeded in-memory storage");
        let groups = Arc::new(InMemoryGroupRepository::new());
        for name in SEED_GROUPS {
            groups.seed(name);
        }
        let users = Arc::new(InMemoryUserRepository::new());
        // User 1 moderates in the demo setup.
        users.set_role(UserId::new(1), Role::Admin).await;
        (groups, Arc::new(InMemoryRequestRepository::new()), users)
    };

    let sessions = Arc::new(InMemorySessionStore::new());
    let engine = DialogueEngine::new(
        users,
        sessions,
        RegistryResolver::new(groups.clone()),
        RequestLedger::new(requests, groups),
    );
    let transport = Arc::new(ConsoleTransport::new());
    let dispatcher = DirectiveDispatcher::new(transport.clone());

    println!("groupdesk harness - /start, /user <id>, button tokens, or free text");

    let mut acting = UserId::new(100);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if let Some(id) = input.strip_prefix("/user ") {
            match id.trim().parse::<UserId>() {
                Ok(user) => {
                    acting = user;
                    println!("(acting as user {})", acting);
                }
                Err(_) => println!("(usage: /user <numeric id>)"),
            }
            continue;
        }

        let chat = ChatId::from(acting);
        let result = if input == "/start" {
            engine.handle_start(acting, chat).await
        } else if let Ok(token) = input.parse::<CallbackToken>() {
            engine
                .handle_callback(acting, chat, transport.last_message_id(), token)
                .await
        } else {
            engine.handle_text(acting, chat, input).await
        };

        match result {
            Ok(directives) => dispatcher.dispatch(directives).await?,
            Err(e) => tracing::error!(error = %e, "event handling failed"),
        }
    }

    Ok(())
}

//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::domain::{AdminRole, NewUser, UserType};
use crate::email::BrevoNotifier;
use crate::jwt::JwtManager;
use crate::repository::{
    booking::BookingRepositoryImpl, contact::ContactRepositoryImpl, user::UserRepositoryImpl,
    UserRepository,
};
use crate::service::{AccountService, AuthService, BookingService, ContactService};
use crate::state::HasServices;
use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: MySqlPool,
    pub auth_service: Arc<AuthService<UserRepositoryImpl>>,
    pub account_service: Arc<AccountService<UserRepositoryImpl>>,
    pub booking_service: Arc<BookingService<BookingRepositoryImpl>>,
    pub contact_service: Arc<ContactService<ContactRepositoryImpl, BrevoNotifier>>,
    pub jwt_manager: JwtManager,
}

impl HasServices for AppState {
    type UserRepo = UserRepositoryImpl;
    type BookingRepo = BookingRepositoryImpl;
    type ContactRepo = ContactRepositoryImpl;
    type Notifier = BrevoNotifier;

    fn config(&self) -> &Config {
        &self.config
    }

    fn auth_service(&self) -> &AuthService<Self::UserRepo> {
        &self.auth_service
    }

    fn account_service(&self) -> &AccountService<Self::UserRepo> {
        &self.account_service
    }

    fn booking_service(&self) -> &BookingService<Self::BookingRepo> {
        &self.booking_service
    }

    fn contact_service(&self) -> &ContactService<Self::ContactRepo, Self::Notifier> {
        &self.contact_service
    }

    fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    async fn check_ready(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.db_pool).await.is_ok()
    }
}

/// Build the HTTP router with generic state type
///
/// Generic over the state so the same routes serve the production
/// `AppState` and mock-backed states in tests.
pub fn build_router<S: HasServices>(state: S) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready::<S>))
        // Auth endpoints
        .route("/api/auth/register", post(api::auth::register::<S>))
        .route("/api/auth/login", post(api::auth::login::<S>))
        .route("/api/auth/me", get(api::auth::me::<S>))
        .route("/api/auth/update", put(api::auth::update_profile::<S>))
        // Booking endpoints
        .route("/api/bookings", post(api::booking::create::<S>))
        .route("/api/bookings/my", get(api::booking::list_mine::<S>))
        // Admin endpoints
        .route("/api/admin/bookings", get(api::admin::list_bookings::<S>))
        .route(
            "/api/admin/bookings/{id}",
            put(api::admin::update_booking_status::<S>)
                .delete(api::admin::delete_booking::<S>),
        )
        .route(
            "/api/admin/users",
            get(api::admin::list_users::<S>).post(api::admin::create_user::<S>),
        )
        .route("/api/admin/users/{id}", axum::routing::delete(api::admin::delete_user::<S>))
        // Contact endpoint
        .route("/api/contact", post(api::contact::submit::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Create the superadmin account on first startup if configured.
/// Idempotent: an existing account with the configured email is left alone.
async fn seed_superadmin(users: &impl UserRepository, config: &Config) -> Result<()> {
    let (Some(email), Some(password)) = (&config.admin.email, &config.admin.password) else {
        info!("Superadmin seed not configured, skipping");
        return Ok(());
    };

    if users.find_by_email(email).await?.is_some() {
        return Ok(());
    }

    let password_hash = crate::crypto::password::hash_password(password)?;
    users
        .create(&NewUser {
            first_name: "Super".to_string(),
            last_name: "Admin".to_string(),
            full_name: "Super Admin".to_string(),
            email: email.clone(),
            password_hash,
            phone: None,
            address: None,
            user_type: UserType::Admin,
            role: AdminRole::Superadmin,
        })
        .await?;

    info!("Seeded superadmin account {}", email);
    Ok(())
}

/// Connect to the database, wire up services, and serve HTTP
pub async fn run(config: Config) -> Result<()> {
    let db_pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    info!("Connected to database");

    sqlx::migrate!("./migrations").run(&db_pool).await?;
    info!("Migrations applied");

    let user_repo = Arc::new(UserRepositoryImpl::new(db_pool.clone()));
    let booking_repo = Arc::new(BookingRepositoryImpl::new(db_pool.clone()));
    let contact_repo = Arc::new(ContactRepositoryImpl::new(db_pool.clone()));

    seed_superadmin(user_repo.as_ref(), &config).await?;

    let jwt_manager = JwtManager::new(config.jwt.clone());
    let notifier = Arc::new(BrevoNotifier::new(config.notify.clone()));

    let auth_service = Arc::new(AuthService::new(user_repo.clone(), jwt_manager.clone()));
    let account_service = Arc::new(AccountService::new(user_repo.clone()));
    let booking_service = Arc::new(BookingService::new(booking_repo));
    let contact_service = Arc::new(ContactService::new(contact_repo, notifier));

    let http_addr = config.http_addr();
    let state = AppState {
        config: Arc::new(config),
        db_pool,
        auth_service,
        account_service,
        booking_service,
        contact_service,
        jwt_manager,
    };

    let app = build_router(state);

    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server listening on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

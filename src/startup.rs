use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::config::{AdminSettings, DatabaseSettings, Settings};
use crate::routes::{
    handle_create_client, handle_create_project, handle_create_subscription, handle_dashboard,
    handle_delete_client, handle_delete_project, handle_delete_submission,
    handle_delete_subscriber, handle_export_subscribers, handle_list_clients, handle_list_inbox,
    handle_list_projects, handle_list_subscribers, handle_login, handle_logout,
    handle_mark_submission_read, handle_submit_contact, handle_update_client,
    handle_update_project, health_check,
};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let db_pool = get_connection_db_pool(&config.database);
        let redis_client = redis::Client::open(config.get_redis_address())
            .expect("Failed to create the Redis client.");

        let listener =
            TcpListener::bind(config.get_address()).expect("Failed to bind the address.");
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, db_pool, redis_client, config.admin.clone())?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    redis_client: redis::Client,
    admin_settings: AdminSettings,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    let redis_client = web::Data::new(redis_client);
    let admin_settings = web::Data::new(admin_settings);

    let server = HttpServer::new(move || {
        // App is where your application logic lives: routing, middlewares, request handler, etc
        App::new()
            // 'wrap' method adds a middleware to the App. This specific middleware provide incoming
            // request logger
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            // Public intake endpoints, fed by the marketing site's forms
            .route("/contact", web::post().to(handle_submit_contact))
            .route("/subscriptions", web::post().to(handle_create_subscription))
            .route("/auth/login", web::post().to(handle_login))
            .route("/auth/logout", web::post().to(handle_logout))
            // Admin console, gated by the AdminSession extractor
            .route("/admin", web::get().to(handle_dashboard))
            .route("/admin/inbox", web::get().to(handle_list_inbox))
            .route(
                "/admin/inbox/{id}/read",
                web::post().to(handle_mark_submission_read),
            )
            .route("/admin/inbox/{id}", web::delete().to(handle_delete_submission))
            .route("/admin/subscribers", web::get().to(handle_list_subscribers))
            .route(
                "/admin/subscribers/export",
                web::get().to(handle_export_subscribers),
            )
            .route(
                "/admin/subscribers/{id}",
                web::delete().to(handle_delete_subscriber),
            )
            .route("/admin/projects", web::get().to(handle_list_projects))
            .route("/admin/projects", web::post().to(handle_create_project))
            .route("/admin/projects/{id}", web::put().to(handle_update_project))
            .route("/admin/projects/{id}", web::delete().to(handle_delete_project))
            .route("/admin/clients", web::get().to(handle_list_clients))
            .route("/admin/clients", web::post().to(handle_create_client))
            .route("/admin/clients/{id}", web::put().to(handle_update_client))
            .route("/admin/clients/{id}", web::delete().to(handle_delete_client))
            .app_data(db_pool.clone())
            .app_data(redis_client.clone())
            .app_data(admin_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_connection_db_pool(config: &DatabaseSettings) -> Pool<Postgres> {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(config.get_db_options())
}

use appointment_service::{
    api::{self, state::AppointmentAppState},
    config::{DEFAULT_CONFIG_PATH, ServiceConfig},
    infrastructure::appointment::InMemoryAppointmentRepository,
};
use std::{env, sync::Arc};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let _guard = shared::telemetry::init_telemetry("appointment-service");

    let config_path =
        env::var("APPOINTMENT_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ServiceConfig::load(&config_path)
        .expect("Failed to load service config")
        .with_port_override(env::var("SERVER_PORT").ok().as_deref());

    let state = Arc::new(AppointmentAppState {
        appointment_repo: Arc::new(InMemoryAppointmentRepository::new()),
    });

    let app = api::router(state, &config);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind");

    tracing::info!(
        "appointment-service running at http://localhost:{}{}",
        config.port,
        config.graphql_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shared::shutdown::shutdown_signal())
        .await
        .expect("Oppsie! Server crashed!");

    tracing::info!("appointment-service shut down");
}

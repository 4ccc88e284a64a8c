use config::initialize_config;
use log::{error, info};
use std::sync::Arc;

mod config;
mod controller;
mod models;
mod parser;
mod routes;
mod search;

#[tokio::main]
async fn main() {
    env_logger::init();
    // initialize the env configuration and the backend client factory.
    let app_state = initialize_config(None).await;

    // use log library to gracefully log the error and exit the application if the app_state is not initialized.
    let app_state = match app_state {
        Ok(app_state) => Arc::new(app_state),
        Err(err) => {
            error!("Failed to initialize the app state: {}", err);
            std::process::exit(1);
        }
    };

    let port = config::get_server_port();

    // set up the api routes
    let search_routes = routes::search_routes(app_state.clone());

    info!("Code search api listening on port {}", port);
    warp::serve(search_routes).run(([0, 0, 0, 0], port)).await;
}

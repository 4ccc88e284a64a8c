use anyhow::Context;
use lazy_static::lazy_static;
use std::env;
use std::sync::{Arc, RwLock};

use crate::search::backend::BackendConnection;
use crate::search::{HttpSearchClientFactory, SearchClientFactory};

const DEFAULT_SERVER_PORT: u16 = 3003;

#[derive(Debug, Clone)]
pub struct Configuration {
    search_backend_url: String,
    search_backend_api_key: Option<String>,
    server_port: u16,
}

pub struct AppState {
    pub clients: Arc<dyn SearchClientFactory>,
}

// Create a global instance of the configuration
lazy_static! {
    static ref GLOBAL_CONFIG: RwLock<Configuration> = RwLock::new(Configuration {
        search_backend_url: String::new(),
        search_backend_api_key: None,
        server_port: DEFAULT_SERVER_PORT,
    });
}

// Function to load the configuration from the environment
pub async fn initialize_config(env_file: Option<String>) -> anyhow::Result<AppState> {
    // Load the environment variables from the file if provided
    if let Some(file) = env_file {
        dotenv::from_filename(file).context("Failed to load environment file")?;
    } else {
        dotenv::dotenv().ok();
    }

    let config = Configuration {
        search_backend_url: env::var("SEARCH_BACKEND_URL")
            .context("SEARCH_BACKEND_URL must be set")?,
        search_backend_api_key: env::var("SEARCH_BACKEND_API_KEY").ok(), // Optional, hence `ok()`
        server_port: match env::var("SERVER_PORT") {
            Ok(port) => port.parse().context("SERVER_PORT must be a port number")?,
            Err(_) => DEFAULT_SERVER_PORT,
        },
    };
    {
        let mut global_config = GLOBAL_CONFIG.write().expect("Failed to acquire write lock");
        *global_config = config.clone();

        log::debug!(
            "Loaded configuration:
            SearchBackendUrl: {},
            ServerPort: {}",
            config.search_backend_url,
            config.server_port,
        );
    }

    let connection = BackendConnection::new(
        config.search_backend_url,
        config.search_backend_api_key,
        reqwest::Client::new(),
    );

    Ok(AppState {
        clients: Arc::new(HttpSearchClientFactory::new(connection)),
    })
}

// Getter for the server port
pub fn get_server_port() -> u16 {
    GLOBAL_CONFIG.read().unwrap().server_port
}

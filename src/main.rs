//! # Mini HTTP - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging, abre el puerto y
//! atiende conexiones. Si no se puede abrir el puerto, termina con
//! código de salida 1.

use mini_http::config::Config;
use mini_http::logging::init_logging;
use mini_http::server::Server;
use tracing::error;

fn main() {
    let config = Config::new();
    init_logging(&config.log_filter);

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        error!("Error fatal: {}", e);
        std::process::exit(1);
    }
}

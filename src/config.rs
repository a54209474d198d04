//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor HTTP con soporte para argumentos CLI y
//! variables de entorno. Se carga una vez al arrancar y es de solo lectura.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./mini_http --directory /tmp/files --port 4221
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_DIRECTORY=/tmp/files HTTP_READ_TIMEOUT_MS=5000 ./mini_http
//! ```

use clap::Parser;
use std::path::Path;
use std::time::Duration;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "mini_http")]
#[command(about = "Servidor HTTP/1.1 mínimo sobre TCP")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Directorio base para /files/. Si no se indica, /files/ siempre es 404
    #[arg(long, env = "HTTP_DIRECTORY")]
    pub directory: Option<String>,

    // === Timeouts ===

    /// Timeout de lectura por conexión en milisegundos (0 = sin límite)
    #[arg(long = "read-timeout-ms", default_value = "0", env = "HTTP_READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,

    /// Timeout de escritura por conexión en milisegundos (0 = sin límite)
    #[arg(long = "write-timeout-ms", default_value = "0", env = "HTTP_WRITE_TIMEOUT_MS")]
    pub write_timeout_ms: u64,

    /// Directiva de logging (formato EnvFilter de tracing)
    #[arg(long = "log", default_value = "info", env = "RUST_LOG")]
    pub log_filter: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use mini_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Directorio base configurado. Un valor vacío cuenta como ausente.
    pub fn directory(&self) -> Option<&Path> {
        self.directory
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(Path::new)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        millis(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Option<Duration> {
        millis(self.write_timeout_ms)
    }
}

fn millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

impl Default for Config {
    /// Configuración por defecto (mismos valores que los flags sin argumentos)
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4221,
            directory: None,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            log_filter: "info".to_string(),
        }
    }
}

//! # Mini HTTP
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado directamente sobre sockets TCP.
//! Atiende un conjunto fijo de rutas:
//!
//! | Ruta | Respuesta |
//! |---|---|
//! | `/` | 200 OK sin body |
//! | `/echo/<x>` | 200 OK, body `<x>` como text/plain |
//! | `/user-agent` | 200 OK, body con el header User-Agent |
//! | `/files/<name>` | contenido del archivo, o 404 |
//! | otra | 404 Not Found |
//!
//! ## Arquitectura
//!
//! - `http`: lectura de requests y serialización de responses
//! - `router`: tabla ordenada de rutas exactas y de prefijo
//! - `handlers`: un handler por ruta
//! - `server`: loop de aceptación, un thread por conexión
//! - `config`: flags CLI y variables de entorno
//! - `error` y `logging`: errores tipados y tracing
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http::config::Config;
//! use mini_http::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("Error al abrir el puerto");
//! server.run().expect("Error en el servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;

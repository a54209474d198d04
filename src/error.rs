//! # Errores del Servidor
//! src/error.rs
//!
//! Taxonomía de errores de transporte. Los errores de los handlers
//! (archivo inexistente, lectura truncada) nunca llegan aquí: se
//! convierten directamente en respuestas 404/500.

use thiserror::Error;

/// Errores al leer un request desde el socket
///
/// Cualquiera de ellos aborta la conexión sin enviar respuesta.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("IO error while reading request: {0}")]
    Io(#[from] std::io::Error),

    /// EOF antes de recibir una línea completa terminada en `\n`
    #[error("Connection closed before the request was complete")]
    ConnectionClosed,

    /// Línea sin terminador dentro del límite de longitud
    #[error("Request line or header exceeds {0} bytes")]
    LineTooLong(usize),
}

/// Errores a nivel de proceso o de conexión
#[derive(Error, Debug)]
pub enum ServerError {
    /// Único error fatal: no se pudo abrir el puerto
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

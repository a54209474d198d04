//! # Handlers del Servidor
//!
//! Cada handler recibe el Request y los [`Params`](crate::router::Params)
//! que le pasa el router, y retorna una Response.
//!
//! - **basic**: `/`, `/echo/<x>`, `/user-agent` y el 404 por defecto
//! - **files**: `/files/<name>`, lectura de archivos del directorio base

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;

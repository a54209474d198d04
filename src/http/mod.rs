//! # Módulo HTTP
//!
//! Implementa el subconjunto de HTTP/1.1 que necesita el servidor, sin
//! librerías de alto nivel:
//!
//! - Lectura de la request line y los headers desde un stream con buffer
//! - Construcción y serialización de responses
//! - Códigos de estado
//!
//! No hay chunked transfer encoding, ni keep-alive, ni lectura de body:
//! cada conexión transporta exactamente un request y una response.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! User-Agent: curl/8.0\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod request;   // Lectura de HTTP requests
pub mod response;  // Construcción y escritura de HTTP responses
pub mod status;    // Códigos de estado HTTP

pub use request::Request;
pub use response::Response;
pub use status::StatusCode;

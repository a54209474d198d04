//! # Lectura de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Lee un único request desde un stream con buffer.
//!
//! ## Formato
//!
//! ```text
//! GET /user-agent HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! 1. **Request Line**: `METHOD PATH [VERSION]`, separados por un espacio
//! 2. **Headers**: pares `Name: Value`, uno por línea
//! 3. **Empty Line**: una línea que es exactamente `\r\n`
//!
//! El body nunca se lee. El path no se decodifica (sin percent-decoding).

use crate::error::ReadError;
use std::collections::HashMap;
use std::io::{BufRead, Read};

/// Longitud máxima de una línea (request line o header), terminador incluido
pub const MAX_LINE_LEN: usize = 8192;

/// Request HTTP parseado. Inmutable una vez construido.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Primer token de la request line, sin validar
    method: String,

    /// Path tal cual llegó (ej: "/echo/abc"). Vacío si la línea tenía
    /// menos de dos tokens
    path: String,

    /// Tercer token, si existe (ej: "HTTP/1.1")
    version: Option<String>,

    /// Headers con el nombre en minúsculas. Un duplicado sobrescribe
    headers: HashMap<String, String>,
}

impl Request {
    /// Lee la request line y el bloque de headers desde `reader`
    ///
    /// Se detiene en la línea vacía que cierra los headers; no consume nada
    /// más allá de ella.
    ///
    /// # Errores
    ///
    /// Cualquier error de lectura, EOF antes de una línea completa o una
    /// línea de más de [`MAX_LINE_LEN`] bytes. Los bytes que no son UTF-8
    /// se reemplazan por U+FFFD y el request se atiende igual.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ReadError> {
        let request_line = read_line(reader)?;
        let (method, path, version) = parse_request_line(&request_line);

        let mut headers = HashMap::new();
        loop {
            let line = read_line(reader)?;
            if line == "\r\n" {
                break;
            }
            parse_header(&line, &mut headers);
        }

        Ok(Request {
            method,
            path,
            version,
            headers,
        })
    }

    /// Parsea un request completo desde bytes en memoria
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("User-Agent"), Some("curl"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ReadError> {
        let mut reader = buffer;
        Self::read_from(&mut reader)
    }

    /// Método HTTP tal cual llegó (no se valida)
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Todos los headers, con nombres en minúsculas
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }
}

/// Lee una línea terminada en `\n`, incluyendo el terminador
fn read_line<R: BufRead>(reader: &mut R) -> Result<String, ReadError> {
    let mut buf = Vec::new();
    let n = reader
        .by_ref()
        .take(MAX_LINE_LEN as u64)
        .read_until(b'\n', &mut buf)?;

    if buf.last() != Some(&b'\n') {
        // Se agotó el límite sin ver el terminador
        if n == MAX_LINE_LEN {
            return Err(ReadError::LineTooLong(MAX_LINE_LEN));
        }
        // EOF sin terminador: la conexión se cerró a mitad de línea
        return Err(ReadError::ConnectionClosed);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parsea la request line: `METHOD PATH [VERSION]`
///
/// Con menos de dos tokens el path queda vacío; el router lo trata como 404.
fn parse_request_line(line: &str) -> (String, String, Option<String>) {
    let mut parts = line.trim().split(' ');

    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();
    let version = parts.next().map(str::to_string);

    (method, path, version)
}

/// Parsea un header `Name: Value` y lo inserta en `headers`
///
/// Las líneas sin ':' se ignoran.
fn parse_header(line: &str, headers: &mut HashMap<String, String>) {
    let line = line.trim();

    if let Some(colon_pos) = line.find(':') {
        let name = line[..colon_pos].trim().to_ascii_lowercase();
        let value = line[colon_pos + 1..].trim().to_string();
        headers.insert(name, value);
    }
}

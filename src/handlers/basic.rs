//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - /: health check, 200 sin headers ni body
//! - /echo/<x>: devuelve `<x>` como text/plain
//! - /user-agent: devuelve el header User-Agent del request
//! - cualquier otra ruta: 404 sin body

use crate::http::{Request, Response, StatusCode};
use crate::router::Params;

/// Handler para /
pub fn root_handler(_req: &Request, _params: &Params<'_>) -> Response {
    Response::empty(StatusCode::Ok)
}

/// Handler para /echo/<x>
///
/// El body es el resto del path tal cual, incluidas otras barras.
pub fn echo_handler(_req: &Request, params: &Params<'_>) -> Response {
    Response::text(params.tail)
}

/// Handler para /user-agent
///
/// Si el request no trae User-Agent, el body es vacío (con Content-Length: 0).
pub fn user_agent_handler(req: &Request, _params: &Params<'_>) -> Response {
    Response::text(req.header("user-agent").unwrap_or_default())
}

pub fn not_found_handler(_req: &Request, _params: &Params<'_>) -> Response {
    Response::empty(StatusCode::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(raw: &[u8]) -> Request {
        Request::parse(raw).unwrap()
    }

    fn params(tail: &str) -> Params<'_> {
        Params { tail, directory: None }
    }

    #[test]
    fn test_root_handler() {
        let request = make_request(b"GET / HTTP/1.1\r\n\r\n");
        let response = root_handler(&request, &params(""));

        assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\n");
    }

    #[test]
    fn test_echo_handler() {
        let request = make_request(b"GET /echo/abc123 HTTP/1.1\r\n\r\n");
        let response = echo_handler(&request, &params("abc123"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"abc123");
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("6"));
    }

    #[test]
    fn test_echo_handler_empty_suffix() {
        let request = make_request(b"GET /echo/ HTTP/1.1\r\n\r\n");
        let response = echo_handler(&request, &params(""));

        assert!(response.body().is_empty());
        assert_eq!(response.header("Content-Length"), Some("0"));
    }

    #[test]
    fn test_user_agent_handler() {
        let request = make_request(b"GET /user-agent HTTP/1.1\r\nUser-Agent: test-client/1.0\r\n\r\n");
        let response = user_agent_handler(&request, &params(""));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"test-client/1.0");
        assert_eq!(response.header("Content-Length"), Some("15"));
    }

    #[test]
    fn test_user_agent_handler_missing_header() {
        let request = make_request(b"GET /user-agent HTTP/1.1\r\n\r\n");
        let response = user_agent_handler(&request, &params(""));

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
        assert_eq!(response.header("Content-Length"), Some("0"));
    }

    #[test]
    fn test_not_found_handler() {
        let request = make_request(b"GET /nonexistent HTTP/1.1\r\n\r\n");
        let response = not_found_handler(&request, &params("/nonexistent"));

        assert_eq!(response.to_bytes(), b"HTTP/1.1 404 Not Found\r\n\r\n");
    }
}

//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea el path de un request a un handler.
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se evalúan en orden de registro y gana la primera que
//! coincide. Una ruta es exacta (`/user-agent`) o de prefijo (`/echo/`);
//! en las de prefijo el handler recibe el resto del path sin decodificar.
//! Si nada coincide, 404 sin body.

use crate::handlers;
use crate::http::{Request, Response};
use std::path::Path;

/// Datos que el router pasa al handler junto con el request
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    /// Resto del path tras el prefijo ("" en rutas exactas)
    pub tail: &'a str,

    /// Directorio base para servir archivos, si está configurado
    pub directory: Option<&'a Path>,
}

/// Tipo de función handler
pub type Handler = fn(&Request, &Params<'_>) -> Response;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Matcher {
    Exact(String),
    Prefix(String),
}

impl Matcher {
    /// Devuelve el resto del path si coincide
    fn matches<'p>(&self, path: &'p str) -> Option<&'p str> {
        match self {
            Matcher::Exact(expected) => (path == expected.as_str()).then_some(""),
            Matcher::Prefix(prefix) => path.strip_prefix(prefix.as_str()),
        }
    }
}

/// Router con tabla ordenada de rutas
pub struct Router {
    routes: Vec<(Matcher, Handler)>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Router con las rutas del servidor, en orden de precedencia
    pub fn standard() -> Self {
        let mut router = Router::new();
        router.exact("/", handlers::root_handler);
        router.prefix("/echo/", handlers::echo_handler);
        router.exact("/user-agent", handlers::user_agent_handler);
        router.prefix("/files/", handlers::files_handler);
        router
    }

    /// Registra una ruta que coincide solo con `path` exacto
    pub fn exact(&mut self, path: &str, handler: Handler) {
        self.routes.push((Matcher::Exact(path.to_string()), handler));
    }

    /// Registra una ruta que coincide con cualquier path que empiece por `prefix`
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::router::{Params, Router};
    /// use mini_http::http::{Request, Response};
    ///
    /// fn shout(_req: &Request, params: &Params<'_>) -> Response {
    ///     Response::text(&params.tail.to_uppercase())
    /// }
    ///
    /// let mut router = Router::new();
    /// router.prefix("/shout/", shout);
    ///
    /// let request = Request::parse(b"GET /shout/hey HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(router.route(&request, None).body(), b"HEY");
    /// ```
    pub fn prefix(&mut self, prefix: &str, handler: Handler) {
        self.routes.push((Matcher::Prefix(prefix.to_string()), handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    pub fn route(&self, request: &Request, directory: Option<&Path>) -> Response {
        let path = request.path();

        for (matcher, handler) in &self.routes {
            if let Some(tail) = matcher.matches(path) {
                let params = Params { tail, directory };
                return handler(request, &params);
            }
        }

        handlers::not_found_handler(request, &Params { tail: path, directory })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;

    fn route(raw: &[u8]) -> Response {
        let request = Request::parse(raw).unwrap();
        Router::standard().route(&request, None)
    }

    #[test]
    fn test_root_is_empty_ok() {
        let response = route(b"GET / HTTP/1.1\r\n\r\n");
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_echo_keeps_nested_slashes() {
        let response = route(b"GET /echo/a/b/c HTTP/1.1\r\n\r\n");
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"a/b/c");
    }

    #[test]
    fn test_echo_without_trailing_slash_is_not_found() {
        let response = route(b"GET /echo HTTP/1.1\r\n\r\n");
        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_user_agent_must_match_exactly() {
        let response = route(b"GET /user-agent/x HTTP/1.1\r\nUser-Agent: a\r\n\r\n");
        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_files_without_directory_is_not_found() {
        let response = route(b"GET /files/report.txt HTTP/1.1\r\n\r\n");
        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_empty_path_is_not_found() {
        let response = route(b"GET\r\n\r\n");
        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(response.headers().is_empty());
    }

    #[test]
    fn test_first_registered_route_wins() {
        fn first(_req: &Request, _params: &Params<'_>) -> Response {
            Response::text("first")
        }
        fn second(_req: &Request, _params: &Params<'_>) -> Response {
            Response::text("second")
        }

        let mut router = Router::new();
        router.prefix("/a", first);
        router.exact("/a/b", second);

        let request = Request::parse(b"GET /a/b HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(router.route(&request, None).body(), b"first");
    }

    #[test]
    fn test_empty_router_is_not_found() {
        let request = Request::parse(b"GET / HTTP/1.1\r\n\r\n").unwrap();
        let response = Router::new().route(&request, None);
        assert_eq!(response.status(), StatusCode::NotFound);
    }
}

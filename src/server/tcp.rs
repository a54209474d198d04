//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones en un loop y procesa cada una en su propio thread.
//! Cada conexión transporta un único request: se lee, se enruta, se
//! escribe la respuesta y se cierra el socket. Los threads no comparten
//! estado mutable; el router y la configuración son de solo lectura.

use crate::config::Config;
use crate::error::ServerError;
use crate::http::Request;
use crate::router::Router;
use std::io::{self, BufReader};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Servidor HTTP/1.1 con un thread por conexión
pub struct Server {
    config: Arc<Config>,
    router: Arc<Router>,
    listener: TcpListener,
}

impl Server {
    /// Abre el puerto configurado con las rutas estándar
    ///
    /// # Errores
    ///
    /// `ServerError::Bind` si no se puede escuchar en `config.address()`.
    pub fn bind(config: Config) -> Result<Self, ServerError> {
        Self::with_router(config, Router::standard())
    }

    pub fn with_router(config: Config, router: Router) -> Result<Self, ServerError> {
        let address = config.address();
        info!("Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)
            .map_err(|source| ServerError::Bind { address: address.clone(), source })?;

        match config.directory() {
            Some(dir) if !dir.is_dir() => {
                warn!("El directorio {} no existe: /files/ responderá 404", dir.display());
            }
            Some(dir) => info!("Sirviendo archivos desde {}", dir.display()),
            None => info!("Sin directorio configurado: /files/ deshabilitado"),
        }

        Ok(Self {
            config: Arc::new(config),
            router: Arc::new(router),
            listener,
        })
    }

    /// Dirección real en la que escucha (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de aceptación. Solo retorna si el listener deja de producir
    /// conexiones; los errores de `accept` se registran y se continúa.
    pub fn run(self) -> Result<(), ServerError> {
        info!("Servidor escuchando en {}", self.local_addr()?);

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let config = Arc::clone(&self.config);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());
                    debug!("Nueva conexión desde {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &router, &config) {
                            match &e {
                                ServerError::Write(_) => error!("[{}] {}", peer_addr, e),
                                _ => warn!("[{}] Conexión abortada: {}", peer_addr, e),
                            }
                        }
                    });
                }
                Err(e) => {
                    error!("Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa un único request sobre `stream` y lo cierra
    ///
    /// Si la lectura falla no se envía respuesta. El socket se cierra al
    /// salir en todos los casos.
    pub fn handle_connection(stream: TcpStream, router: &Router, config: &Config) -> Result<(), ServerError> {
        let start = Instant::now();

        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        let mut reader = BufReader::new(&stream);
        let request = Request::read_from(&mut reader)?;
        debug!("{} {}", request.method(), request.path());

        let response = router.route(&request, config.directory());

        let mut writer = &stream;
        response.write_to(&mut writer).map_err(ServerError::Write)?;

        debug!(
            "{} ({} bytes de body, {:.2}ms)",
            response.status(),
            response.body().len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadError;
    use crate::http::request::MAX_LINE_LEN;
    use crate::logging::init_test_logging;
    use std::io::{Read, Write};
    use std::net::Shutdown;

    fn ephemeral_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").expect("bind")
    }

    /// Acepta una conexión, la procesa y retorna el resultado junto con
    /// lo que recibió el cliente
    fn exchange(raw: &[u8], config: Config) -> (Result<(), ServerError>, Vec<u8>) {
        init_test_logging();
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();

        let t = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, &Router::standard(), &config)
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(raw).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();

        (t.join().unwrap(), buf)
    }

    #[test]
    fn test_handle_connection_echo() {
        let (result, buf) = exchange(b"GET /echo/abc123 HTTP/1.1\r\n\r\n", Config::default());

        assert!(result.is_ok());
        assert_eq!(
            buf,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 6\r\n\r\nabc123"
        );
    }

    #[test]
    fn test_handle_connection_not_found() {
        let (result, buf) = exchange(b"GET /nonexistent HTTP/1.1\r\n\r\n", Config::default());

        assert!(result.is_ok());
        assert_eq!(buf, b"HTTP/1.1 404 Not Found\r\n\r\n");
    }

    #[test]
    fn test_handle_connection_with_timeouts() {
        let mut config = Config::default();
        config.read_timeout_ms = 2_000;
        config.write_timeout_ms = 2_000;

        let (result, buf) = exchange(b"GET / HTTP/1.1\r\n\r\n", config);

        assert!(result.is_ok());
        assert_eq!(buf, b"HTTP/1.1 200 OK\r\n\r\n");
    }

    #[test]
    fn test_non_utf8_header_still_answered() {
        let (result, buf) = exchange(b"GET / HTTP/1.1\r\nUser-Agent: caf\xe9\r\n\r\n", Config::default());

        assert!(result.is_ok());
        assert_eq!(buf, b"HTTP/1.1 200 OK\r\n\r\n");
    }

    #[test]
    fn test_incomplete_headers_send_nothing() {
        let (result, buf) = exchange(b"GET / HTTP/1.1\r\nHost: x\r\n", Config::default());

        assert!(matches!(result, Err(ServerError::Read(ReadError::ConnectionClosed))));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_overlong_line_sends_nothing() {
        let raw = vec![b'a'; MAX_LINE_LEN];
        let (result, buf) = exchange(&raw, Config::default());

        assert!(matches!(result, Err(ServerError::Read(ReadError::LineTooLong(MAX_LINE_LEN)))));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_peer_closed_immediately() {
        let (result, buf) = exchange(b"", Config::default());

        assert!(matches!(result, Err(ServerError::Read(ReadError::ConnectionClosed))));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_bind_failure_is_reported() {
        let taken = ephemeral_listener();
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = taken.local_addr().unwrap().port();

        let result = Server::bind(config);

        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }
}

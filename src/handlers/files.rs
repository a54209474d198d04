//! # Servir Archivos
//! src/handlers/files.rs
//!
//! Handler de solo lectura para /files/<name>:
//!
//! - sin directorio base configurado → 404
//! - archivo inexistente, ilegible o fuera del directorio base → 404
//! - fallo de lectura después de abrirlo (incluido un directorio) → 500
//! - en otro caso → 200 con el contenido como application/octet-stream

use crate::http::{Request, Response, StatusCode};
use crate::router::Params;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Handler para /files/<name>
pub fn files_handler(_req: &Request, params: &Params<'_>) -> Response {
    let Some(base) = params.directory else {
        return Response::empty(StatusCode::NotFound);
    };

    match resolve_within(base, params.tail) {
        Some(path) => serve_file(&path),
        None => Response::empty(StatusCode::NotFound),
    }
}

/// Une `name` al directorio base y verifica que el resultado siga dentro
///
/// Ambas rutas se canonicalizan, así que `..`, rutas absolutas y symlinks
/// que apunten fuera del directorio quedan excluidos. Retorna `None` si
/// alguna de las dos rutas no existe.
pub fn resolve_within(base: &Path, name: &str) -> Option<PathBuf> {
    let base = match base.canonicalize() {
        Ok(base) => base,
        Err(e) => {
            debug!("Directorio base {} no disponible: {}", base.display(), e);
            return None;
        }
    };

    let resolved = base.join(name).canonicalize().ok()?;

    if !resolved.starts_with(&base) {
        warn!("Ruta fuera del directorio base rechazada: {:?}", name);
        return None;
    }

    Some(resolved)
}

/// Lee el archivo completo y construye la respuesta
fn serve_file(path: &Path) -> Response {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("No se pudo abrir {}: {}", path.display(), e);
            return Response::empty(StatusCode::NotFound);
        }
    };

    let size = match file.metadata() {
        Ok(metadata) if metadata.is_dir() => {
            warn!("{} es un directorio", path.display());
            return Response::empty(StatusCode::InternalServerError);
        }
        Ok(metadata) => metadata.len(),
        Err(e) => {
            warn!("No se pudo obtener el tamaño de {}: {}", path.display(), e);
            return Response::empty(StatusCode::InternalServerError);
        }
    };

    match read_sized(file, size) {
        Ok(contents) => Response::octet_stream(contents),
        Err(e) => {
            warn!("Error leyendo {}: {}", path.display(), e);
            Response::empty(StatusCode::InternalServerError)
        }
    }
}

/// Lee exactamente `size` bytes de `reader`
///
/// Si el reader se agota antes, retorna `UnexpectedEof`.
fn read_sized<R: Read>(reader: R, size: u64) -> io::Result<Vec<u8>> {
    let mut contents = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    let read = reader.take(size).read_to_end(&mut contents)?;

    if read as u64 != size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("lectura truncada: {} de {} bytes", read, size),
        ));
    }

    Ok(contents)
}

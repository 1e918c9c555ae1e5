//! Static file server for the built wallet portal
//!
//! Serves the Trunk output from dist/ on port 8080, falling back to
//! index.html for client-side routes.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("failed to bind port 8080");

    println!("Web3 Connect portal running at http://{addr}");
    println!("Serving from dist/ (run `trunk build` first)");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => serve(stream),
            Err(e) => eprintln!("connection error: {e}"),
        }
    }
}

fn serve(mut stream: TcpStream) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => return,
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split('?').next().unwrap_or("/");
    let file = resolve(path);

    let (status, mime, body) = match fs::read(&file) {
        Ok(body) => ("200 OK", content_type(&file), body),
        Err(_) => (
            "404 NOT FOUND",
            "text/plain",
            b"not found; run `trunk build` to populate dist/".to_vec(),
        ),
    };

    let header = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {mime}\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );
    if let Err(e) = stream
        .write_all(header.as_bytes())
        .and_then(|_| stream.write_all(&body))
        .and_then(|_| stream.flush())
    {
        eprintln!("failed to write response: {e}");
    }
}

/// Map a request path to a file under dist/. Paths that do not name an
/// existing file serve index.html so client-side routes deep-link.
fn resolve(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }
    let candidate = Path::new("dist").join(path.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else {
        PathBuf::from("dist/index.html")
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type(Path::new("dist/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("dist/app.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("dist/app_bg.js")), "application/javascript");
        assert_eq!(content_type(Path::new("dist/unknown.bin")), "application/octet-stream");
    }

    #[test]
    fn test_resolve_root_serves_index() {
        assert_eq!(resolve("/"), PathBuf::from("dist/index.html"));
        assert_eq!(resolve(""), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_resolve_missing_file_falls_back_to_index() {
        assert_eq!(resolve("/status"), PathBuf::from("dist/index.html"));
    }
}

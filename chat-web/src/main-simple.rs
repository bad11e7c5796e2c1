//! Static file server for the chat widget bundle
//!
//! Serves the compiled Leptos WASM app from the dist/ directory on port
//! 8080. The chat route itself is answered by the backend service; this
//! server only hands out the static bundle for local development.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("Chat widget server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let file_path = resolve_file(request_path(&request_line));
    let content_type = content_type_for(&file_path);

    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", contents, content_type),
        Err(_) => {
            eprintln!("File not found: {}", file_path.display());
            let error_page =
                b"<!DOCTYPE html><html><body><h1>Error: File not found</h1></body></html>".to_vec();
            ("404 NOT FOUND", error_page, "text/html; charset=utf-8")
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write file contents: {}", e);
    }

    let _ = stream.flush();
}

/// Extract the path component of an HTTP request line, dropping the query string
fn request_path(request_line: &str) -> &str {
    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    match full_path.split_once('?') {
        Some((path, _query)) => path,
        None => full_path,
    }
}

/// Map a request path to a file under dist/.
///
/// Directories and missing files fall back to index.html, so reloading the
/// page at any path still serves the app shell.
fn resolve_file(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }

    let mut file_path = PathBuf::from("dist");
    file_path.push(path.strip_prefix('/').unwrap_or(path));

    if file_path.is_dir() || !file_path.exists() {
        PathBuf::from("dist/index.html")
    } else {
        file_path
    }
}

/// Content type by file extension
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

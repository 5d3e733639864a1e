use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

use laravel_skeleton::archive::ArchiveExtractor;
use laravel_skeleton::error::{Error, Result};
use laravel_skeleton::fetcher::Fetcher;
use laravel_skeleton::updater::DependencyUpdater;

/// Builds an in-memory zip archive from `(name, body)` entries.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, body) in entries {
        writer
            .start_file(*name, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(body).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Produces the error a real fetch would yield on an unreachable host,
/// without touching the network: an invalid URL fails inside the client.
pub fn network_error(url: &str) -> Error {
    let source = reqwest::blocking::Client::new()
        .get("http://")
        .send()
        .expect_err("request against an invalid URL must fail");
    Error::FetchFailed { url: url.to_string(), source }
}

/// Fetcher serving canned responses from memory and recording every
/// requested URL. Unknown URLs behave like a network failure.
pub struct StubFetcher {
    resources: HashMap<String, Vec<u8>>,
    pub fetched: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self { resources: HashMap::new(), fetched: Mutex::new(Vec::new()) }
    }

    pub fn with(mut self, url: &str, body: Vec<u8>) -> Self {
        self.resources.insert(url.to_string(), body);
        self
    }

    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    fn lookup(&self, url: &str) -> Result<&[u8]> {
        self.fetched.lock().unwrap().push(url.to_string());
        match self.resources.get(url) {
            Some(body) => Ok(body),
            None => Err(network_error(url)),
        }
    }
}

impl Fetcher for StubFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        let body = self.lookup(url)?;
        Ok(String::from_utf8_lossy(body).into_owned())
    }

    fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64> {
        let body = self.lookup(url)?.to_vec();
        std::fs::write(dest, &body)?;
        Ok(body.len() as u64)
    }
}

/// Extractor delegating to a real backend while counting invocations.
pub struct CountingExtractor<E> {
    inner: E,
    pub extract_calls: Mutex<u32>,
}

impl<E> CountingExtractor<E> {
    pub fn new(inner: E) -> Self {
        Self { inner, extract_calls: Mutex::new(0) }
    }

    pub fn extractions(&self) -> u32 {
        *self.extract_calls.lock().unwrap()
    }
}

impl<E: ArchiveExtractor> ArchiveExtractor for CountingExtractor<E> {
    fn ensure_available(&self) -> Result<()> {
        self.inner.ensure_available()
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        *self.extract_calls.lock().unwrap() += 1;
        self.inner.extract(archive, dest)
    }
}

/// Updater that records the directories it was asked to update.
pub struct RecordingUpdater {
    pub calls: Mutex<Vec<PathBuf>>,
}

impl RecordingUpdater {
    pub fn new() -> Self {
        Self { calls: Mutex::new(Vec::new()) }
    }

    pub fn updated_dirs(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencyUpdater for RecordingUpdater {
    fn update(&self, project_dir: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(project_dir.to_path_buf());
        Ok(())
    }
}

/// Lists temp archive files (`*.zip` with the given prefix) left in `dir`.
pub fn temp_archives(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix) && name.ends_with(".zip"))
        })
        .collect()
}

/// Starts a minimal HTTP/1.1 server in a background thread, serving the
/// given path -> body routes. Returns the base URL, e.g.
/// "http://127.0.0.1:12345". Unknown paths get a 404. The server runs
/// until the process exits.
pub fn start_http_server(routes: HashMap<String, Vec<u8>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{port}")
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Vec<u8>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();

    match routes.get(&path) {
        Some(body) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}

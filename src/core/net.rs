// src/core/net.rs
// HTTP/1.0 GET over TCP (std-only, no TLS).
// HTTP/1.0 so the server closes the connection at the end (no chunked transfer).

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{NET_TIMEOUT_SECS, USER_AGENT};
use crate::feed::FeedError;

/// GET `path` from `host:port` and return the body as text.
/// Anything but a 2xx status line is a `FeedError::Status`.
pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, FeedError> {
    let mut s = TcpStream::connect((host, port))
        .map_err(|e| FeedError::Connect { host: s!(host), port, source: e })?;
    let timeout = Some(Duration::from_secs(NET_TIMEOUT_SECS));
    s.set_read_timeout(timeout)?;
    s.set_write_timeout(timeout)?;

    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nAccept: text/csv, text/plain, */*\r\nConnection: close\r\n\r\n"
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;

    split_response(&buf).map(|body| String::from_utf8_lossy(body).into_owned())
}

/// Check the status line and return the body bytes.
fn split_response(raw: &[u8]) -> Result<&[u8], FeedError> {
    let head_end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or_else(|| FeedError::Malformed(s!("no header terminator in HTTP response")))?;

    let head = String::from_utf8_lossy(&raw[..head_end]);
    let status = head.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if !code.starts_with('2') {
        return Err(FeedError::Status(s!(status.trim())));
    }

    Ok(&raw[head_end + 4..])
}

// src/tests/utils.rs
use astra::{Body, Request, Response, ResponseBuilder, Server};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

pub const COZY_LISTING: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Listing</title>
  <meta name="description" content="Cozy 3BR home">
</head>
<body><h1>For sale</h1></body>
</html>"#;

pub const FULL_LISTING: &str = r#"<!DOCTYPE html>
<html>
<head><meta name="description" content="Meta fallback"></head>
<body>
  <nav><img src="/logo.svg"><img alt="spacer"></nav>
  <h1 data-testid="address"> 123 Main St, Springfield </h1>
  <p>Listed at $450,000</p>
  <span data-testid="price">$449,900</span>
  <div data-testid="home-description-text">
    Bright <em>corner</em> unit.
  </div>
  <img src="/p/1.jpg"><img src="/p/2.jpg"><img src="/p/3.jpg">
  <img src="/p/4.jpg"><img src="/p/5.jpg"><img src="/p/6.jpg">
</body>
</html>"#;

/// Base URL of a local fixture server shared by all tests in this crate.
///
/// Routes: `/listing/cozy`, `/listing/full`, `/ua` (echoes User-Agent),
/// `/slow` (sleeps 2s), `/boom` (500); anything else is 404.
pub fn fixture_base_url() -> &'static str {
    static BASE: OnceLock<String> = OnceLock::new();

    BASE.get_or_init(|| {
        let addr = local_addr(free_port());

        thread::spawn(move || {
            let _ = Server::bind(&addr).serve(move |req: Request, _info| route(req));
        });

        wait_until_listening(addr);
        format!("http://{addr}")
    })
}

pub fn fixture_url(path: &str) -> String {
    format!("{}{path}", fixture_base_url())
}

/// A URL on a port nothing is listening on.
pub fn refused_url() -> String {
    format!("http://{}/listing", local_addr(free_port()))
}

fn route(req: Request) -> Response {
    match req.uri().path() {
        "/listing/cozy" => html(200, COZY_LISTING.to_string()),
        "/listing/full" => html(200, FULL_LISTING.to_string()),
        "/ua" => {
            let ua = req
                .headers()
                .get("user-agent")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            html(200, ua)
        }
        "/slow" => {
            thread::sleep(Duration::from_secs(2));
            html(200, COZY_LISTING.to_string())
        }
        "/boom" => html(500, "<h1>Internal Server Error</h1>".to_string()),
        _ => html(404, "<h1>Not Found</h1>".to_string()),
    }
}

fn html(status: u16, body: String) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map(|a| a.port())
        .unwrap_or_else(|e| panic!("no free port: {e}"))
}

fn local_addr(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

fn wait_until_listening(addr: SocketAddr) {
    for _ in 0..200 {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("fixture server never came up on {addr}");
}

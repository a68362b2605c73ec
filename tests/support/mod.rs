// Shared primitives for one-time animals server bootstrapping across integration tests.
use std::{
    // `Arc` hands the URL slot to the server thread; `OnceLock` is written exactly once.
    sync::{Arc, OnceLock},
    // Used for the short sleeps in the readiness loops.
    time::Duration,
};

// Base URL of the running server, shared by every test in the binary.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// Guard so the server is started only once per test binary.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    // Several tests race to call this; only the first one starts the server.
    SERVER_READY.get_or_init(|| {
        // Slot the server thread fills with its bound URL.
        let published_url = Arc::new(OnceLock::<String>::new());
        // Second handle moved into the server thread.
        let published_url_thread = Arc::clone(&published_url);
        // Plain OS thread: each `#[tokio::test]` runtime is dropped when its test ends,
        // so the server needs a runtime of its own.
        std::thread::spawn(move || {
            // Runtime owned by the server thread for the rest of the process.
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Port 0 lets the OS pick a free port.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                // Read back the port the OS picked.
                let addr = listener.local_addr().expect("get local addr");
                // Publish the URL before serving so waiting tests can proceed.
                let _ = published_url_thread.set(format!("http://{}", addr));
                // Serve the animals API until the test process exits.
                animals_server::run(listener).await.expect("server failed");
            });
        });
        // Block until the URL is published and the port accepts connections.
        wait_for_server(published_url);
    });

    // Every caller gets the same URL.
    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Wait for the URL to be published, then for the socket to accept TCP connections.
fn wait_for_server(published_url: Arc<OnceLock<String>>) {
    // Poll until the server thread has bound and published its URL.
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        // Back off briefly instead of spinning.
        std::thread::sleep(Duration::from_millis(10));
    };

    // Store the URL globally for later callers.
    let _ = SERVER_URL.set(base_url.clone());

    // host:port for raw TCP connects.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for about two seconds; binding and accepting are not synchronized.
    for _ in 0..100 {
        // A successful connect means axum is accepting.
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    // Fail fast rather than letting every test time out separately.
    panic!("server did not become ready in time");
}

//! Static preview server
//!
//! Serves the blog directory as plain files. Every response carries
//! permissive CORS headers so pages opened from another origin can fetch the
//! generated JSON.

use anyhow::Result;
use axum::{
    http::{HeaderName, HeaderValue},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::Blog;

/// Headers added to every response
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
];

/// Build the router serving `root`
pub fn router(root: impl Into<PathBuf>) -> Router {
    let mut app = Router::new().fallback_service(ServeDir::new(root.into()));

    for (name, value) in CORS_HEADERS {
        app = app.layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    app.layer(TraceLayer::new_for_http())
}

/// Start the preview server and run until Ctrl+C
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let root = blog.serve_root();

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let app = router(&root);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Serving blog at http://localhost:{}", port);
    println!("Directory: {}", root.display());
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

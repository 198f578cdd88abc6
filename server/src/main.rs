//! Static file server for the built site.
//!
//! The site is fully client-rendered, so the server only ships files out of
//! the cargo-leptos site root. Unknown paths fall back to `index.html`, where
//! the wasm router either shows the requested page or its own not-found page.

use std::path::{Path, PathBuf};

use axum::Router;
use thiserror::Error;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};

#[derive(Debug, Error)]
enum ServerError {
    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to load site configuration: {0}")]
    Config(#[from] leptos::config::errors::LeptosConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Router over the site root: static assets first, `index.html` for
/// everything else.
fn site_router(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));
    Router::new()
        .fallback_service(ServeDir::new(site_root).not_found_service(index))
        .layer(CompressionLayer::new())
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    simple_logger::init_with_level(log::Level::Info)?;

    let conf = leptos::config::get_configuration(None)?;
    let site_root = PathBuf::from(conf.leptos_options.site_root.as_ref());
    let addr = conf.leptos_options.site_addr;

    log::info!("serving {} at http://{addr}", site_root.display());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, site_router(&site_root).into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn fake_site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>tsbook shell</html>").unwrap();
        std::fs::create_dir(dir.path().join("pkg")).unwrap();
        std::fs::write(dir.path().join("pkg").join("tsbook.css"), "body {}").unwrap();
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let site = fake_site();
        let (status, body) = get(site_router(site.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("tsbook shell"));
    }

    #[tokio::test]
    async fn test_serves_assets_by_path() {
        let site = fake_site();
        let (status, body) = get(site_router(site.path()), "/pkg/tsbook.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("body {}"));
    }

    #[tokio::test]
    async fn test_falls_back_to_index_for_client_routes() {
        let site = fake_site();
        for uri in ["/chapters", "/chapter-3", "/no-such-page"] {
            let (status, body) = get(site_router(site.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains("tsbook shell"), "{uri}");
        }
    }
}

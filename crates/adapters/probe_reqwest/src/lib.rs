//! # launchpad-adapter-probe-reqwest
//!
//! Driven adapter implementing [`ReachabilityProbe`] with
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Behaviour
//! - One `HEAD` request per probe, carrying the configured `User-Agent`.
//! - The wait is bounded by the per-call timeout handed to
//!   [`ReachabilityProbe::probe`]; nothing process-wide is touched.
//! - Redirects follow reqwest's default policy (up to 10 hops) and the final
//!   status is what gets classified.
//! - `[200, 500)` is reachable. Server errors, timeouts, connection and TLS
//!   failures and malformed URLs are all unreachable. No retries.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `launchpad-app` and `launchpad-domain`.

pub mod config;
pub mod error;

use std::future::Future;
use std::time::Duration;

use launchpad_app::ports::ReachabilityProbe;
use launchpad_domain::status::is_reachable_status;

pub use config::ProbeConfig;
pub use error::ProbeError;

/// Reachability probe backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Build the HTTP client used for every probe.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] when the user agent is not a valid
    /// header value or the TLS backend cannot be initialised.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self { client })
    }

    async fn head(&self, url: &str, timeout: Duration) -> Result<u16, reqwest::Error> {
        let response = self.client.head(url).timeout(timeout).send().await?;
        Ok(response.status().as_u16())
    }
}

impl ReachabilityProbe for HttpProbe {
    fn probe(&self, url: &str, timeout: Duration) -> impl Future<Output = bool> + Send {
        async move {
            match self.head(url, timeout).await {
                Ok(status) => {
                    let reachable = is_reachable_status(status);
                    tracing::debug!(%url, status, reachable, "probe answered");
                    reachable
                }
                Err(err) => {
                    tracing::debug!(%url, %err, timeout = err.is_timeout(), "probe failed");
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::{HeaderMap, Method, StatusCode, header};
    use axum::response::Redirect;
    use axum::routing::any;
    use std::time::Instant;
    use tokio::net::TcpListener;

    const TIMEOUT: Duration = Duration::from_millis(500);
    const SLACK: Duration = Duration::from_secs(1);

    fn probe() -> HttpProbe {
        HttpProbe::new(&ProbeConfig::default()).unwrap()
    }

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn serve_status(status: StatusCode) -> String {
        serve(Router::new().fallback(move || async move { status })).await
    }

    async fn serve_silently() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn should_be_reachable_when_target_returns_ok() {
        let url = serve_status(StatusCode::OK).await;
        assert!(probe().probe(&url, TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_be_reachable_when_target_returns_not_found() {
        let url = serve_status(StatusCode::NOT_FOUND).await;
        assert!(probe().probe(&url, TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_be_reachable_when_target_returns_unauthorized() {
        let url = serve_status(StatusCode::UNAUTHORIZED).await;
        assert!(probe().probe(&url, TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_be_unreachable_when_target_returns_service_unavailable() {
        let url = serve_status(StatusCode::SERVICE_UNAVAILABLE).await;
        assert!(!probe().probe(&url, TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_be_unreachable_when_target_returns_internal_error() {
        let url = serve_status(StatusCode::INTERNAL_SERVER_ERROR).await;
        assert!(!probe().probe(&url, TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_classify_final_status_after_redirects() {
        let app = Router::new()
            .route("/up", any(|| async { Redirect::temporary("/ok") }))
            .route("/ok", any(|| async { StatusCode::OK }))
            .route("/down", any(|| async { Redirect::temporary("/broken") }))
            .route("/broken", any(|| async { StatusCode::BAD_GATEWAY }));
        let base = serve(app).await;

        assert!(probe().probe(&format!("{base}/up"), TIMEOUT).await);
        assert!(!probe().probe(&format!("{base}/down"), TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_send_configured_user_agent() {
        let app = Router::new().fallback(|headers: HeaderMap| async move {
            match headers.get(header::USER_AGENT) {
                Some(ua) if ua == "SciTechDirectory/1.0" => StatusCode::NO_CONTENT,
                _ => StatusCode::SERVICE_UNAVAILABLE,
            }
        });
        let url = serve(app).await;
        assert!(probe().probe(&url, TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_use_head_method() {
        let app = Router::new().fallback(|method: Method| async move {
            if method == Method::HEAD {
                StatusCode::OK
            } else {
                StatusCode::SERVICE_UNAVAILABLE
            }
        });
        let url = serve(app).await;
        assert!(probe().probe(&url, TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_give_up_within_timeout_when_target_never_answers() {
        let url = serve_silently().await;

        let started = Instant::now();
        let reachable = probe().probe(&url, TIMEOUT).await;
        let elapsed = started.elapsed();

        assert!(!reachable);
        assert!(elapsed >= TIMEOUT, "returned before the timeout: {elapsed:?}");
        assert!(elapsed < TIMEOUT + SLACK, "took too long: {elapsed:?}");
    }

    #[tokio::test]
    async fn should_be_unreachable_when_connection_refused() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        assert!(!probe().probe(&format!("http://127.0.0.1:{port}"), TIMEOUT).await);
    }

    #[tokio::test]
    async fn should_be_unreachable_when_host_does_not_resolve() {
        let url = "http://launchpad-probe.invalid/";
        assert!(!probe().probe(url, Duration::from_secs(2)).await);
    }

    #[tokio::test]
    async fn should_be_unreachable_when_url_is_malformed() {
        for url in ["", "not a url", "atlas.sci-techlab.com", "http://"] {
            assert!(!probe().probe(url, TIMEOUT).await, "{url:?} should be unreachable");
        }
    }

    #[test]
    fn should_reject_user_agent_that_is_not_a_header_value() {
        let config = ProbeConfig {
            user_agent: "bad\nagent".to_string(),
            ..ProbeConfig::default()
        };
        assert!(matches!(HttpProbe::new(&config), Err(ProbeError::Client(_))));
    }
}

//! Locale routing middleware for Axum
//!
//! Runs before any route handler. Requests for page paths without a
//! supported locale prefix are redirected to the negotiated locale;
//! prefixed requests pass through with a `Content-Language` header.
//! Paths excluded by the [`PathFilter`] are not touched.

use axum::{
    http::{header, HeaderValue, Request},
    response::{IntoResponse, Redirect, Response},
};
use folio_i18n::{
    parse_accept_language, path_locale, resolve, LocaleConfig, PathFilter, RouteDecision,
};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::debug;

// ============================================================================
// Locale State (shared across requests)
// ============================================================================

/// Immutable routing configuration shared by every request
#[derive(Debug, Clone)]
pub struct LocaleState {
    locales: Arc<LocaleConfig>,
    filter: Arc<PathFilter>,
}

impl LocaleState {
    /// Create a new locale state
    pub fn new(locales: LocaleConfig, filter: PathFilter) -> Self {
        Self {
            locales: Arc::new(locales),
            filter: Arc::new(filter),
        }
    }

    /// Supported locale set
    pub fn locales(&self) -> &LocaleConfig {
        &self.locales
    }

    /// Decide what to do with a request path.
    ///
    /// Returns `None` when the path is excluded from locale routing.
    pub fn decide(&self, path: &str, accept_language: Option<&str>) -> Option<RouteDecision> {
        if !self.filter.should_intercept(path) {
            return None;
        }
        let preferences = accept_language
            .map(parse_accept_language)
            .unwrap_or_default();
        Some(resolve(path, &preferences, &self.locales))
    }
}

// ============================================================================
// Axum Layer
// ============================================================================

/// Locale routing layer for Axum
#[derive(Clone)]
pub struct LocaleLayer {
    state: LocaleState,
}

impl LocaleLayer {
    /// Create a new locale layer
    pub fn new(state: LocaleState) -> Self {
        Self { state }
    }
}

impl<S> Layer<S> for LocaleLayer {
    type Service = LocaleService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LocaleService {
            inner,
            state: self.state.clone(),
        }
    }
}

// ============================================================================
// Axum Service
// ============================================================================

/// Locale routing service wrapper
#[derive(Clone)]
pub struct LocaleService<S> {
    inner: S,
    state: LocaleState,
}

type BoxFuture<T, E> =
    std::pin::Pin<Box<dyn std::future::Future<Output = std::result::Result<T, E>> + Send>>;

impl<S, B> Service<Request<B>> for LocaleService<S>
where
    S: Service<Request<B>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<Response, S::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> BoxFuture<Response, S::Error> {
        let state = self.state.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let path = req.uri().path();
            let accept_language = req
                .headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok());

            match state.decide(path, accept_language) {
                None => inner.call(req).await,
                Some(RouteDecision::PassThrough) => {
                    let content_language = path_locale(path, state.locales())
                        .and_then(|locale| HeaderValue::from_str(locale.as_str()).ok());

                    let mut response = inner.call(req).await?;
                    if let Some(value) = content_language {
                        response
                            .headers_mut()
                            .entry(header::CONTENT_LANGUAGE)
                            .or_insert(value);
                    }
                    Ok(response)
                }
                Some(RouteDecision::RedirectTo(target)) => {
                    let location = match req.uri().query() {
                        Some(query) => format!("{target}?{query}"),
                        None => target,
                    };
                    debug!(path = %path, location = %location, "Redirecting to localized path");
                    Ok(redirect_response(&location))
                }
            }
        })
    }
}

/// 307 redirect that caches per `Accept-Language`
fn redirect_response(location: &str) -> Response {
    let mut response = Redirect::temporary(location).into_response();
    response
        .headers_mut()
        .insert(header::VARY, HeaderValue::from_static("accept-language"));
    response
}

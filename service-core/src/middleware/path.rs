use axum::extract::{OriginalUri, Request};
use axum::http::uri::{PathAndQuery, Uri};
use tower::util::MapRequest;
use tower::ServiceBuilder;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Service produced by [`lenient_routing`].
pub type LenientRouting<S> = MapRequest<NormalizePath<S>, fn(Request) -> Request>;

/// Route case-insensitively and ignore trailing slashes: `/HEALTH/` reaches
/// the `/health` route.
///
/// Must wrap the router from outside; `Router::layer` runs after routing.
/// The path as sent is kept in [`OriginalUri`] for error messages.
pub fn lenient_routing<S>(inner: S) -> LenientRouting<S> {
    ServiceBuilder::new()
        .map_request(lowercase_path as fn(Request) -> Request)
        .layer(NormalizePathLayer::trim_trailing_slash())
        .service(inner)
}

fn lowercase_path(mut req: Request) -> Request {
    let original = req.uri().clone();
    req.extensions_mut().insert(OriginalUri(original.clone()));

    let path = original.path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return req;
    }

    let lowered = path.to_ascii_lowercase();
    let path_and_query = match original.query() {
        Some(query) => format!("{}?{}", lowered, query),
        None => lowered,
    };

    let mut parts = original.into_parts();
    parts.path_and_query = PathAndQuery::try_from(path_and_query).ok();
    if let Ok(uri) = Uri::from_parts(parts) {
        *req.uri_mut() = uri;
    }

    req
}

//! Local-only access guard.
//! Refuses callers from other hosts on configured path prefixes.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::AccessConfig;
use crate::http::middleware::origin::RequestOrigin;
use crate::observability::metrics;

pub async fn local_only_middleware(
    State(access): State<Arc<AccessConfig>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !access.is_local_only(req.uri().path()) {
        return next.run(req).await;
    }

    let origin = RequestOrigin::from_extensions(req.extensions());
    if origin.is_local {
        return next.run(req).await;
    }

    tracing::warn!(
        remote_ip = %origin.remote_ip,
        path = %req.uri().path(),
        "Remote caller refused on local-only path"
    );
    metrics::record_local_only_rejected();
    (StatusCode::FORBIDDEN, "Local access only").into_response()
}

//! Origin classification middleware and extractor.

use std::convert::Infallible;

use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, Extensions, Request},
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use crate::observability::metrics;
use crate::origin::{is_local, normalized_remote_ip, ConnectionAddrs};

/// Classification of the connection a request arrived on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestOrigin {
    /// Raw addresses as reported by the transport.
    #[serde(skip)]
    pub addrs: ConnectionAddrs,
    /// Request came from the serving host.
    pub is_local: bool,
    /// Canonical caller address.
    pub remote_ip: String,
}

impl RequestOrigin {
    pub fn from_addrs(addrs: ConnectionAddrs) -> Self {
        Self {
            addrs,
            is_local: is_local(&addrs),
            remote_ip: normalized_remote_ip(&addrs),
        }
    }

    /// Classify from request extensions.
    ///
    /// Uses the attached `RequestOrigin` if the middleware already ran,
    /// otherwise the connect info. Requests with neither (e.g. built in
    /// tests and sent with `oneshot`) are treated as unaddressed.
    pub fn from_extensions(extensions: &Extensions) -> Self {
        if let Some(origin) = extensions.get::<RequestOrigin>() {
            return origin.clone();
        }

        let addrs = extensions
            .get::<ConnectInfo<ConnectionAddrs>>()
            .map(|ConnectInfo(addrs)| *addrs)
            .unwrap_or_default();
        Self::from_addrs(addrs)
    }
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_extensions(&parts.extensions))
    }
}

/// Attach a `RequestOrigin` to every request.
pub async fn origin_middleware(mut req: Request<Body>, next: Next) -> Response {
    let origin = RequestOrigin::from_extensions(req.extensions());

    tracing::debug!(
        remote_ip = %origin.remote_ip,
        is_local = origin.is_local,
        path = %req.uri().path(),
        "Request origin classified"
    );
    metrics::record_origin(origin.is_local);

    req.extensions_mut().insert(origin);
    next.run(req).await
}

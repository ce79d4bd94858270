use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;
use std::time::Instant;

// Buffering limit for rewriting response bodies. Our biggest response is a
// full player listing, which is nowhere near this.
const MAX_BUFFERED_BODY: usize = 2 * 1024 * 1024;

/// Wraps every handler: measures wall-clock duration, logs one line per
/// request, and stamps `response_time_ms` into successful JSON-object bodies.
///
/// The stamping requires buffering the response, parsing it, and rebuilding
/// it. That's fine here — every body this service produces is a small JSON
/// document. Non-object bodies (arrays, plain text) and non-2xx responses
/// pass through untouched, so error payloads keep their published shape.
pub async fn response_timer(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms,
        "request completed"
    );

    if !response.status().is_success() {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if !is_json {
        return response;
    }

    let (mut parts, body) = response.into_parts();

    let bytes = match to_bytes(body, MAX_BUFFERED_BODY).await {
        Ok(b) => b,
        Err(e) => {
            // The body is already consumed at this point, so there's nothing
            // sensible to hand back but a bare 500.
            tracing::error!("Failed to buffer response body for timing: {}", e);
            return Response::builder()
                .status(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::empty())
                .unwrap_or_default();
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(mut map)) => {
            map.insert("response_time_ms".to_string(), elapsed_ms.into());
            match serde_json::to_vec(&map) {
                Ok(buf) => {
                    // Content-Length no longer matches; let hyper recompute it.
                    parts.headers.remove(header::CONTENT_LENGTH);
                    Response::from_parts(parts, Body::from(buf))
                }
                Err(_) => Response::from_parts(parts, Body::from(bytes)),
            }
        }
        // Not a JSON object — pass through as-is.
        _ => Response::from_parts(parts, Body::from(bytes)),
    }
}

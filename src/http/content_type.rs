use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub(super) const ACTIVITY_STREAMS: &str =
    "application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\"";

pub(super) struct ActivityStreamsJson<T>(pub(super) Json<T>);

impl<T> IntoResponse for ActivityStreamsJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        if response.status() != StatusCode::INTERNAL_SERVER_ERROR {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(ACTIVITY_STREAMS));
        }
        response
    }
}

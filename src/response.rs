//! Standard response envelope helpers.
//!
//! Every body mirrors its HTTP status in an integer `httpStatus` field,
//! matching the shape the site's frontend already consumes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(rename = "httpStatus")]
    pub http_status: u16,
}

#[derive(Serialize)]
pub struct MessageEnvelope<T> {
    pub data: T,
    pub message: String,
    #[serde(rename = "httpStatus")]
    pub http_status: u16,
}

#[derive(Serialize)]
pub struct CountedEnvelope<T> {
    pub data: Vec<T>,
    #[serde(rename = "httpStatus")]
    pub http_status: u16,
    pub count: usize,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            data,
            http_status: StatusCode::OK.as_u16(),
        }),
    )
}

/// HTTP 200 with a different mirror value in the body. Login keeps the
/// transport status at 200 and reports 401 only in the envelope.
pub fn ok_mirror<T: Serialize>(data: T, mirror: StatusCode) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            data,
            http_status: mirror.as_u16(),
        }),
    )
}

pub fn ok_counted<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<CountedEnvelope<T>>) {
    let count = data.len();
    (
        StatusCode::OK,
        Json(CountedEnvelope {
            data,
            http_status: StatusCode::OK.as_u16(),
            count,
        }),
    )
}

pub fn with_message<T: Serialize>(
    status: StatusCode,
    data: T,
    message: &str,
) -> (StatusCode, Json<MessageEnvelope<T>>) {
    (
        status,
        Json(MessageEnvelope {
            data,
            message: message.to_string(),
            http_status: status.as_u16(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_uses_camel_case_mirror_key() {
        let (status, Json(body)) = ok(vec![1, 2, 3]);
        assert_eq!(status, StatusCode::OK);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["httpStatus"], 200);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn mirror_can_differ_from_transport_status() {
        let (status, Json(body)) = ok_mirror(Option::<u8>::None, StatusCode::UNAUTHORIZED);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.http_status, 401);
    }

    #[test]
    fn counted_envelope_carries_count() {
        let (_, Json(body)) = ok_counted(vec!["a", "b"]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["httpStatus"], 200);
    }

    #[test]
    fn message_envelope_serializes_all_fields() {
        let (status, Json(body)) =
            with_message(StatusCode::CREATED, "x", "Topic created successfully");
        assert_eq!(status, StatusCode::CREATED);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["httpStatus"], 201);
        assert_eq!(json["message"], "Topic created successfully");
    }
}

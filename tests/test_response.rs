use wirehttp::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::OK.as_u16(), 200);
    assert_eq!(StatusCode::NO_CONTENT.as_u16(), 204);
    assert_eq!(StatusCode::BAD_REQUEST.as_u16(), 400);
    assert_eq!(StatusCode::FORBIDDEN.as_u16(), 403);
    assert_eq!(StatusCode::NOT_FOUND.as_u16(), 404);
    assert_eq!(StatusCode::METHOD_NOT_ALLOWED.as_u16(), 405);
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::OK.reason_phrase(), "OK");
    assert_eq!(StatusCode::NO_CONTENT.reason_phrase(), "No Content");
    assert_eq!(StatusCode::BAD_REQUEST.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::FORBIDDEN.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NOT_FOUND.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::METHOD_NOT_ALLOWED.reason_phrase(),
        "Method Not Allowed"
    );
    assert_eq!(
        StatusCode::INTERNAL_SERVER_ERROR.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_unknown_status_code_reason() {
    assert_eq!(StatusCode(201).reason_phrase(), "Unknown");
    assert_eq!(StatusCode(999).reason_phrase(), "Unknown");
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::OK)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::OK).body(body.clone()).build();

    assert_eq!(response.header("Content-Length"), Some("16"));
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::OK)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("999"));
}

#[test]
fn test_response_builder_keeps_insertion_order() {
    let response = ResponseBuilder::new(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-cache")
        .header("X-Frame-Options", "DENY")
        .body(b"{}".to_vec())
        .build();

    let keys: Vec<&str> = response.headers.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["Content-Type", "Cache-Control", "X-Frame-Options", "Content-Length"]
    );
}

#[test]
fn test_response_builder_duplicate_header_replaces_value() {
    let response = ResponseBuilder::new(StatusCode::OK)
        .header("X-Custom", "one")
        .header("X-Custom", "two")
        .build();

    assert_eq!(response.headers.len(), 2);
    assert_eq!(response.header("X-Custom"), Some("two"));
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::NO_CONTENT).build();

    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_response_text_helper() {
    let response = Response::text(StatusCode::OK, "hi");

    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.body, b"hi".to_vec());
}

#[test]
fn test_error_helpers_have_plain_text_bodies() {
    let cases = [
        (Response::not_found(), StatusCode::NOT_FOUND),
        (Response::forbidden(), StatusCode::FORBIDDEN),
        (Response::method_not_allowed(), StatusCode::METHOD_NOT_ALLOWED),
        (Response::internal_error(), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (response, status) in cases {
        assert_eq!(response.status, status);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert!(!response.body.is_empty());
    }
}

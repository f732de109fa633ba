use wirehttp::client::{DEFAULT_PORT, create_request, load_body, parse_target};
use wirehttp::http::parser::parse_http_request;
use wirehttp::http::request::Method;
use wirehttp::http::response::HeaderMap;

#[test]
fn test_create_request_defaults_host() {
    let request = create_request("GET", "/index.html", HeaderMap::new(), "");

    assert_eq!(
        request,
        "GET /index.html HTTP/1.1\r\nHost: 127.0.0.1\r\n\r\n"
    );
}

#[test]
fn test_create_request_keeps_header_order() {
    let mut headers = HeaderMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("X-Id".to_string(), "7".to_string());

    let request = create_request("POST", "/api", headers, "{}");

    assert_eq!(
        request,
        "POST /api HTTP/1.1\r\nContent-Type: application/json\r\nX-Id: 7\r\nHost: 127.0.0.1\r\n\r\n{}"
    );
}

#[test]
fn test_created_request_parses_back() {
    let cases = [
        ("GET", "/", ""),
        ("POST", "/submit", "hello"),
        ("POST", "/multi", "line one\r\n\r\nline two"),
        ("OPTIONS", "/cors", ""),
        ("PUT", "/x?y=z", "payload"),
    ];

    for (method, path, body) in cases {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent".to_string(), "test".to_string());

        let raw = create_request(method, path, headers, body);
        let parsed = parse_http_request(raw.as_bytes()).unwrap();

        assert_eq!(parsed.method, Method::parse(method));
        assert_eq!(parsed.path, path);
        assert_eq!(parsed.body, body.as_bytes().to_vec());
        assert_eq!(parsed.header("User-Agent"), Some("test"));
    }
}

#[test]
fn test_parse_target_defaults() {
    let target = parse_target("localhost").unwrap();

    assert_eq!(target.host, "localhost");
    assert_eq!(target.port, DEFAULT_PORT);
    assert_eq!(target.path, "/");
}

#[test]
fn test_parse_target_with_port_and_path() {
    let target = parse_target("127.0.0.1:9000/docs/index.html?v=1").unwrap();

    assert_eq!(target.host, "127.0.0.1");
    assert_eq!(target.port, 9000);
    assert_eq!(target.path, "/docs/index.html?v=1");
}

#[test]
fn test_parse_target_with_scheme() {
    let target = parse_target("http://example.com:8081/a").unwrap();

    assert_eq!(target.host, "example.com");
    assert_eq!(target.port, 8081);
    assert_eq!(target.path, "/a");
}

#[test]
fn test_parse_target_rejects_garbage() {
    assert!(parse_target("http://").is_err());
    assert!(parse_target("host:notaport").is_err());
}

#[test]
fn test_load_body_from_file_or_literal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("body.json");
    std::fs::write(&path, "{\"a\":1}").unwrap();

    assert_eq!(load_body(path.to_str().unwrap()).unwrap(), "{\"a\":1}");
    assert_eq!(load_body("just text").unwrap(), "just text");
}

#[test]
fn test_parse_target_keeps_explicit_port_80() {
    let target = parse_target("http://example.com:80/").unwrap();

    assert_eq!(target.port, 80);
}

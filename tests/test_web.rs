#![cfg(feature = "server")]

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, String, String) {
    let response = yui::web::router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_landing_page() {
    let (status, content_type, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<h1>Yui</h1>"));
    assert!(!body.contains("<input"));
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_case_converter_empty() {
    let (status, _, body) = get("/app/case").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<input id="input" name="input""#));
    assert!(body.contains(r#"value="""#));

    for name in [
        "Upper Case",
        "Lower Case",
        "Kebab Case",
        "Snake Case",
        "Camel Case",
        "Pascal Case",
    ] {
        assert!(
            body.contains(&format!("<label>{}</label><span></span>", name)),
            "{}",
            name
        );
    }
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_case_converter_with_input() {
    let (status, _, body) = get("/app/case?input=Hello%20World").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="Hello World""#));
    assert!(body.contains("<label>Upper Case</label><span>HELLO WORLD</span>"));
    assert!(body.contains("<label>Snake Case</label><span>Hello_World</span>"));
    assert!(body.contains("<label>Camel Case</label><span>helloworld</span>"));
    assert!(body.contains("<label>Pascal Case</label><span>HelloWorld</span>"));
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_case_converter_partial() {
    let (status, content_type, body) = get("/app/case?input=hello+world&partial=true").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.starts_with(r#"<ul id="casings">"#));
    assert!(!body.contains("<html"));
    assert!(body.contains("<span>hello-world</span>"));
    assert!(body.contains("<span>helloworld</span>"));
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_case_converter_spaces_and_markup() {
    let (_, _, body) = get("/app/case?input=%20%20&partial=1").await;
    assert!(body.contains("<label>Kebab Case</label><span>--</span>"));
    assert!(body.contains("<label>Snake Case</label><span>__</span>"));

    let (_, _, body) = get("/app/case?input=%3Cb%3E&partial=true").await;
    assert!(body.contains("<span>&lt;B&gt;</span>"));
    assert!(!body.contains("<b>"));
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_unknown_partial_value_renders_page() {
    let (status, _, body) = get("/app/case?input=x&partial=maybe").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Case Converter</h1>"));
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_not_found() {
    let (status, _, body) = get("/app/color").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}

//! The echo handler.
//!
//! Returns the request body unchanged with status 200, after dumping it to
//! the diagnostic stream. Body read failures and oversized bodies never reach
//! this function; axum and the body limit layer answer those.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, Method},
    response::{IntoResponse, Response},
};

use crate::config::{DumpEncoding, EchoRouteConfig};
use crate::http::dump::BodyDump;
use crate::http::request::request_id_of;

/// Per-route settings shared with the handler.
#[derive(Debug, Clone)]
pub struct EchoSettings {
    pub dump_encoding: DumpEncoding,
    pub max_logged_bytes: usize,
}

impl From<&EchoRouteConfig> for EchoSettings {
    fn from(config: &EchoRouteConfig) -> Self {
        Self {
            dump_encoding: config.dump_encoding,
            max_logged_bytes: config.max_logged_bytes,
        }
    }
}

/// Echo the request body back to the client.
pub async fn echo_handler(
    State(settings): State<Arc<EchoSettings>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    tracing::info!(
        request_id = %request_id_of(&headers),
        method = %method,
        len = body.len(),
        body = %BodyDump::new(&body, settings.dump_encoding, settings.max_logged_bytes),
        "Echoing request body"
    );

    let content_type = headers
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));

    ([(CONTENT_TYPE, content_type)], body).into_response()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use tracing_subscriber::fmt::MakeWriter;

    use crate::config::EchoConfig;
    use crate::http::request::X_REQUEST_ID;
    use crate::http::EchoServer;

    use super::*;

    /// Collects everything the fmt subscriber writes.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn dumps_body_to_log_before_responding() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = EchoServer::new(EchoConfig::default());
        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/echo")
            .header(X_REQUEST_ID, "req-42")
            .body(Body::from(vec![0xff, 0xfe, b'o', b'k']))
            .unwrap();
        let response = server.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let output = logs.contents();
        assert!(output.contains(r"body=b'\xff\xfeok'"), "{output}");
        assert!(output.contains("request_id=req-42"), "{output}");
        assert!(output.contains("len=4"), "{output}");

        let echoed = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&echoed[..], &[0xff, 0xfe, b'o', b'k']);
    }

    #[tokio::test]
    async fn dump_respects_configured_encoding() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut config = EchoConfig::default();
        config.echo.dump_encoding = DumpEncoding::Hex;
        let server = EchoServer::new(config);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .body(Body::from(vec![0xde, 0xad]))
            .unwrap();
        server.router().oneshot(request).await.unwrap();

        let output = logs.contents();
        assert!(output.contains("body=dead"), "{output}");
    }
}

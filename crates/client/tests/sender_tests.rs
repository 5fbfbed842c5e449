// Integration tests for HttpV3MessageSender.
// Each test starts a one-shot HTTP responder on localhost and points the
// sender at it. The live API test needs SENDGRID_API_KEY and is ignored.

use pretty_assertions::assert_eq;
use sendgrid_client::*;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// What the responder saw.
struct CapturedRequest {
    head: String,
    body: String,
}

/// Accepts one connection, captures the request and replies with `response`.
async fn one_shot_server(response: String) -> (Url, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let (head_end, content_length) = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were read");
            buf.extend_from_slice(&chunk[..n]);

            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .map(|v| v.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                break (pos + 4, length);
            }
        };

        while buf.len() < head_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body was read");
            buf.extend_from_slice(&chunk[..n]);
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        CapturedRequest {
            head: String::from_utf8_lossy(&buf[..head_end]).to_string(),
            body: String::from_utf8_lossy(&buf[head_end..head_end + content_length]).to_string(),
        }
    });

    let url = Url::parse(&format!("http://{}/v3/mail/send", addr)).unwrap();
    (url, handle)
}

fn http_response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut out = format!("HTTP/1.1 {}\r\n", status);
    for (name, value) in headers {
        out.push_str(&format!("{}: {}\r\n", name, value));
    }
    out.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));
    out
}

fn sender_for(endpoint: Url) -> HttpV3MessageSender {
    let config = SenderConfig::new("SG.test-key")
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(5));
    HttpV3MessageSender::from_config(config).unwrap()
}

fn test_message() -> Message {
    MessageBuilder::new()
        .set_from("you@domain.ext")
        .add_to("alice@another.domain.ext")
        .add_cc(MessageEndPoint::new("bob", "bob@domain.ext"))
        .add_cc("charly@domain.ext")
        .set_subject("test subject")
        .set_body("test body")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_accepted_message() -> anyhow::Result<()> {
    let (url, server) = one_shot_server(http_response(
        "202 Accepted",
        &[("X-Message-Id", "msg-123")],
        "",
    ))
    .await;

    let result = sender_for(url).send(&test_message()).await?;
    let captured = server.await?;

    assert!(result.is_success());
    assert_eq!(result.status, 202);
    assert_eq!(result.message_id.as_deref(), Some("msg-123"));

    let head = captured.head.to_lowercase();
    assert!(head.starts_with("post /v3/mail/send http/1.1"));
    assert!(head.contains("authorization: bearer sg.test-key"));
    assert!(head.contains("content-type: application/json"));

    assert_eq!(
        captured.body,
        r#"{"personalizations":[{"to":[{"email":"alice@another.domain.ext"}],"cc":[{"email":"bob@domain.ext","name":"bob"},{"email":"charly@domain.ext"}]}],"from":{"email":"you@domain.ext"},"subject":"test subject","content":[{"type":"text/plain","value":"test body"}]}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_rejected_message() -> anyhow::Result<()> {
    let body = r#"{"errors":[{"message":"Permission denied, wrong credentials","field":null,"help":null}]}"#;
    let (url, server) = one_shot_server(http_response(
        "401 Unauthorized",
        &[("Content-Type", "application/json")],
        body,
    ))
    .await;

    let result = sender_for(url).send(&test_message()).await?;
    server.await?;

    assert!(!result.is_success());
    assert_eq!(result.status, 401);
    assert_eq!(result.message_id, None);
    assert_eq!(
        result.errors,
        vec![ApiError {
            message: "Permission denied, wrong credentials".to_string(),
            field: None,
            help: None,
        }]
    );
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_is_an_error() {
    // bind and drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{}/v3/mail/send", addr)).unwrap();
    let err = sender_for(url).send(&test_message()).await.unwrap_err();
    assert!(err.to_string().starts_with("failed to send request to"));
}

#[tokio::test]
#[ignore]
async fn test_live_send() -> anyhow::Result<()> {
    let sender = HttpV3MessageSender::from_env()?;
    let to = std::env::var("SENDGRID_TEST_TO")?;

    let message = MessageBuilder::new()
        .set_from(to.as_str())
        .add_to(to.as_str())
        .set_subject("congrats!")
        .add_body(MessageBody::html("congrats for sending email in HTML!"))
        .build()?;

    let result = sender.send(&message).await?;
    println!("{}", result);
    assert!(result.is_success());
    Ok(())
}

//! End-to-end evaluator behavior against a mocked breach API.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use credential_eval::{BreachClient, BreachVerdict, CredentialEvaluator, Password};

async fn mount_range(server: &MockServer, password: &Password, body: &str, delay: Option<Duration>) {
    let (prefix, _) = password.breach_prefix_suffix();
    let mut template = ResponseTemplate::new(200).set_body_string(body.to_string());
    if let Some(delay) = delay {
        template = template.set_delay(delay);
    }
    Mock::given(method("GET"))
        .and(path(format!("/range/{}", prefix)))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_stale_breach_response_does_not_win() {
    let server = MockServer::start().await;
    let stale = Password::new("abc");
    let current = Password::new("abcdef1A!");

    // The earlier candidate's breach check resolves after the later one's.
    mount_range(&server, &stale, "", Some(Duration::from_millis(400))).await;
    mount_range(&server, &current, "", None).await;

    let evaluator = Arc::new(CredentialEvaluator::new(BreachClient::new(server.uri())));

    let first = {
        let evaluator = evaluator.clone();
        let stale = stale.clone();
        tokio::spawn(async move { evaluator.evaluate(&stale).await })
    };
    // Let the first evaluation start before typing continues.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let second = evaluator
        .evaluate(&current)
        .await
        .unwrap()
        .expect("the latest evaluation must be reported");
    assert!(second.is_acceptable());

    let first = first.await.unwrap().unwrap();
    assert!(first.is_none(), "the superseded evaluation must be discarded");
}

#[tokio::test]
async fn test_breached_password_is_rejected_despite_strength() {
    let server = MockServer::start().await;
    let password = Password::new("abcdef1A!");
    let (_, suffix) = password.breach_prefix_suffix();
    mount_range(&server, &password, &format!("{}:99", suffix), None).await;

    let evaluator = CredentialEvaluator::new(BreachClient::new(server.uri()));
    let evaluation = evaluator.assess(&password).await;

    assert!(evaluation.violations.is_empty());
    assert_eq!(evaluation.breach, BreachVerdict::Breached { count: 99 });
    assert!(!evaluation.is_acceptable());
}

#[tokio::test]
async fn test_unreachable_breach_api_leaves_password_unverified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let evaluator = CredentialEvaluator::new(BreachClient::new(server.uri()));
    let evaluation = evaluator.assess(&Password::new("abcdef1A!")).await;

    // Fail-closed: no verdict means not acceptable, not "assume safe".
    assert_eq!(evaluation.breach, BreachVerdict::Unverified);
    assert!(!evaluation.is_acceptable());
}

#[tokio::test]
async fn test_local_evaluation_needs_no_network() {
    let evaluator = CredentialEvaluator::new(BreachClient::new("http://127.0.0.1:9"));
    let evaluation = evaluator.evaluate_local(&Password::new("abcdef1A!"));

    assert!(evaluation.violations.is_empty());
    assert_eq!(evaluation.breach, BreachVerdict::Unverified);
}

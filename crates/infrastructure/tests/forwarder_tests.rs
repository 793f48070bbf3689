mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::dns_server_mock::{MockBehavior, MockUpstream};
use helpers::MemLogs;
use hickory_proto::op::ResponseCode;
use warden_dns_application::ports::Forwarder;
use warden_dns_domain::{
    QueryLog, QueryRequest, Rcode, RecordClass, RecordType, TransportKind,
};
use warden_dns_infrastructure::dns::forwarding::UpstreamForwarder;

const TEST_TIMEOUT: Duration = Duration::from_millis(250);

fn request(domain: &str) -> QueryRequest {
    QueryRequest {
        domain: domain.to_string(),
        rclass: RecordClass::IN,
        rtype: RecordType::A,
        source: "192.0.2.10:50000".parse().unwrap(),
        transport: TransportKind::Udp,
    }
}

fn fresh_log(request: &QueryRequest) -> QueryLog {
    QueryLog::new(
        request.source.ip(),
        request.domain.clone(),
        request.rclass,
        request.rtype,
    )
}

#[tokio::test]
async fn test_no_upstreams_returns_empty_reply() {
    let logs = Arc::new(MemLogs::default());
    let forwarder = UpstreamForwarder::new(vec![], TEST_TIMEOUT, logs.clone());

    let req = request("example.net");
    let mut log = fresh_log(&req);
    let reply = forwarder.forward(&req, &mut log).await.unwrap();

    assert!(reply.answers.is_empty());
    assert_eq!(reply.rcode, Rcode::NoError);
    assert!(!log.forwarded);
    assert!(logs.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_timed_out_upstream_is_skipped() {
    let (_m1, silent) = MockUpstream::start(MockBehavior::Timeout).await.unwrap();
    let (_m2, answering) = MockUpstream::start(MockBehavior::AnswerA("192.0.2.7".parse().unwrap()))
        .await
        .unwrap();

    let logs = Arc::new(MemLogs::default());
    let forwarder = UpstreamForwarder::new(vec![silent, answering], TEST_TIMEOUT, logs.clone());

    let req = request("example.net");
    let mut log = fresh_log(&req);
    let reply = forwarder.forward(&req, &mut log).await.unwrap();

    assert_eq!(reply.rcode, Rcode::NoError);
    assert_eq!(reply.answers.len(), 1);
    assert_eq!(reply.answers[0].type_code, 1);
    assert_eq!(reply.answers[0].rdata, vec![192, 0, 2, 7]);

    assert!(log.forwarded);
    assert_eq!(log.data.as_deref(), Some("example.net"));
    assert_eq!(logs.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_later_reply_overrides_earlier_answer() {
    // First upstream answers; a later SERVFAIL reply still wins because the
    // fan-out never stops at the first success.
    let (_m1, answering) = MockUpstream::start(MockBehavior::AnswerA("192.0.2.7".parse().unwrap()))
        .await
        .unwrap();
    let (_m2, failing) = MockUpstream::start(MockBehavior::Reply(ResponseCode::ServFail))
        .await
        .unwrap();

    let logs = Arc::new(MemLogs::default());
    let forwarder = UpstreamForwarder::new(vec![answering, failing], TEST_TIMEOUT, logs.clone());

    let req = request("example.net");
    let mut log = fresh_log(&req);
    let reply = forwarder.forward(&req, &mut log).await.unwrap();

    assert_eq!(reply.rcode, Rcode::ServFail);
    assert!(reply.answers.is_empty());

    // The log keeps the mark from the upstream that did answer.
    assert!(log.forwarded);
}

#[tokio::test]
async fn test_all_upstreams_time_out() {
    let (_m1, s1) = MockUpstream::start(MockBehavior::Timeout).await.unwrap();
    let (_m2, s2) = MockUpstream::start(MockBehavior::Timeout).await.unwrap();

    let logs = Arc::new(MemLogs::default());
    let forwarder = UpstreamForwarder::new(vec![s1, s2], TEST_TIMEOUT, logs.clone());

    let req = request("example.net");
    let mut log = fresh_log(&req);
    let reply = forwarder.forward(&req, &mut log).await.unwrap();

    assert!(reply.answers.is_empty());
    assert_eq!(reply.rcode, Rcode::NoError);
    assert!(!log.forwarded);
    assert!(logs.rows.lock().unwrap().is_empty());
}

//! hickory-server request handler: adapts decoded wire queries to the
//! resolution engine and engine outcomes back to wire responses.

use std::sync::Arc;

use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use hickory_proto::xfer::Protocol;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use tracing::{debug, error, info, warn};
use warden_dns_application::ResolveQuery;
use warden_dns_domain::{dns_name, Outcome, QueryRequest, TransportKind};

use super::wire;

pub struct WardenRequestHandler {
    engine: Arc<ResolveQuery>,
}

impl WardenRequestHandler {
    pub fn new(engine: Arc<ResolveQuery>) -> Self {
        Self { engine }
    }
}

#[async_trait::async_trait]
impl RequestHandler for WardenRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_response(request, &mut response_handle, ResponseCode::FormErr, vec![])
                    .await;
            }
        };

        let query = &request_info.query;
        let domain = dns_name::normalize(&query.name().to_utf8());
        let source = request.src();

        info!(domain = %domain, record_type = ?query.query_type(), client = %source.ip(), "DNS query received");

        let Some(rtype) = wire::from_record_type(query.query_type()) else {
            warn!(record_type = ?query.query_type(), "Unsupported record type");
            return send_response(request, &mut response_handle, ResponseCode::NotImp, vec![])
                .await;
        };
        let Some(rclass) = wire::from_dns_class(query.query_class()) else {
            warn!(query_class = ?query.query_class(), "Unsupported query class");
            return send_response(request, &mut response_handle, ResponseCode::Refused, vec![])
                .await;
        };

        let transport = match request.protocol() {
            Protocol::Udp => TransportKind::Udp,
            _ => TransportKind::Tcp,
        };

        let engine_request = QueryRequest {
            domain,
            rclass,
            rtype,
            source,
            transport,
        };

        let outcome = match self.engine.execute(&engine_request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(domain = %engine_request.domain, error = %e, "Query resolution failed");
                return send_response(request, &mut response_handle, ResponseCode::ServFail, vec![])
                    .await;
            }
        };

        let (rcode, answers) = response_parts(&engine_request, outcome);
        send_response(request, &mut response_handle, rcode, answers).await
    }
}

/// Map an engine outcome onto (rcode, answer section). NOERROR only ever
/// goes out alongside at least one answer; every empty answer set is
/// NXDOMAIN.
fn response_parts(request: &QueryRequest, outcome: Outcome) -> (ResponseCode, Vec<Record>) {
    match outcome {
        Outcome::Answered(Some(answer)) => match wire::answer_to_record(&answer) {
            Ok(record) => (ResponseCode::NoError, vec![record]),
            Err(e) => {
                warn!(domain = %request.domain, error = %e, "Failed to encode answer record");
                (ResponseCode::ServFail, vec![])
            }
        },
        Outcome::Answered(None) => {
            debug!(domain = %request.domain, record_type = %request.rtype, "Record matched but produced no answer");
            (ResponseCode::NXDomain, vec![])
        }
        Outcome::Forwarded(reply) => {
            let answers: Vec<Record> = reply
                .answers
                .iter()
                .filter_map(|a| wire::upstream_to_record(a).ok())
                .collect();
            if answers.is_empty() {
                (ResponseCode::NXDomain, vec![])
            } else {
                (wire::to_response_code(reply.rcode), answers)
            }
        }
        Outcome::NoMatch => (ResponseCode::NXDomain, vec![]),
    }
}

async fn send_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
    answers: Vec<Record>,
) -> ResponseInfo {
    debug!(code = ?code, answers = answers.len(), "Sending response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(true);
    let response = builder.build(header, answers.iter(), &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(*request.header())
        }
    }
}

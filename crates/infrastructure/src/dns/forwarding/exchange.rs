//! One query/reply exchange with a single upstream resolver.

use std::net::SocketAddr;
use std::time::Duration;

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use warden_dns_domain::{
    DomainError, ForwardReply, QueryRequest, TransportKind, UpstreamAnswer,
};

use crate::dns::wire;

/// Send the query to `upstream` over the transport the client used and
/// parse whatever comes back. A timeout is reported as
/// [`DomainError::UpstreamTimeout`]; the forwarder treats it as skippable.
pub(super) async fn exchange(
    upstream: SocketAddr,
    request: &QueryRequest,
    timeout: Duration,
) -> Result<ForwardReply, DomainError> {
    let query_bytes = build_query(request)?;

    let reply_bytes = match request.transport {
        TransportKind::Udp => udp_exchange(upstream, &query_bytes, timeout).await?,
        TransportKind::Tcp => tcp_exchange(upstream, &query_bytes, timeout).await?,
    };

    parse_reply(&reply_bytes)
}

/// Build the wire-format query: standard recursive query with a random id
/// and the client's question.
fn build_query(request: &QueryRequest) -> Result<Vec<u8>, DomainError> {
    let name = wire::parse_name(&request.domain)?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(wire::to_record_type(request.rtype));
    query.set_query_class(wire::to_dns_class(request.rclass));

    let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::InvalidMessage(e.to_string()))?;

    Ok(buf)
}

async fn udp_exchange(
    upstream: SocketAddr,
    query: &[u8],
    timeout: Duration,
) -> Result<Vec<u8>, DomainError> {
    let bind_addr: SocketAddr = if upstream.is_ipv4() {
        "0.0.0.0:0".parse().unwrap()
    } else {
        "[::]:0".parse().unwrap()
    };

    let socket = UdpSocket::bind(bind_addr)
        .await
        .map_err(|e| DomainError::Transport(format!("Failed to bind socket: {}", e)))?;
    socket
        .connect(upstream)
        .await
        .map_err(|e| DomainError::Transport(format!("Failed to connect to {}: {}", upstream, e)))?;
    socket
        .send(query)
        .await
        .map_err(|e| DomainError::Transport(format!("Failed to send to {}: {}", upstream, e)))?;

    let mut buf = vec![0u8; 4096];
    let len = tokio::time::timeout(timeout, socket.recv(&mut buf))
        .await
        .map_err(|_| DomainError::UpstreamTimeout {
            server: upstream.to_string(),
        })?
        .map_err(|e| DomainError::Transport(format!("Failed to receive from {}: {}", upstream, e)))?;

    buf.truncate(len);
    Ok(buf)
}

/// TCP exchange with the standard 2-byte length framing. The whole
/// connect/send/receive sequence shares the single per-upstream timeout.
async fn tcp_exchange(
    upstream: SocketAddr,
    query: &[u8],
    timeout: Duration,
) -> Result<Vec<u8>, DomainError> {
    tokio::time::timeout(timeout, async {
        let mut stream = TcpStream::connect(upstream)
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to connect to {}: {}", upstream, e)))?;

        let len = u16::try_from(query.len())
            .map_err(|_| DomainError::InvalidMessage("query exceeds TCP frame".to_string()))?;
        stream
            .write_all(&len.to_be_bytes())
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        stream
            .write_all(query)
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let mut len_buf = [0u8; 2];
        stream
            .read_exact(&mut len_buf)
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        let mut reply = vec![0u8; usize::from(u16::from_be_bytes(len_buf))];
        stream
            .read_exact(&mut reply)
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Ok(reply)
    })
    .await
    .map_err(|_| DomainError::UpstreamTimeout {
        server: upstream.to_string(),
    })?
}

/// Decode an upstream reply. Answers are kept opaque (type code + RDATA
/// bytes) so the listener can re-emit them unchanged.
fn parse_reply(bytes: &[u8]) -> Result<ForwardReply, DomainError> {
    let message = Message::from_vec(bytes)
        .map_err(|e| DomainError::InvalidMessage(format!("Failed to parse reply: {}", e)))?;

    let mut answers = Vec::with_capacity(message.answer_count() as usize);
    for record in message.answers() {
        let mut rdata = Vec::new();
        let mut encoder = BinEncoder::new(&mut rdata);
        record
            .data()
            .emit(&mut encoder)
            .map_err(|e| DomainError::InvalidMessage(e.to_string()))?;

        answers.push(UpstreamAnswer {
            name: record.name().to_utf8(),
            type_code: u16::from(record.record_type()),
            class_code: u16::from(record.dns_class()),
            ttl: record.ttl(),
            rdata,
        });
    }

    Ok(ForwardReply {
        rcode: wire::from_response_code(message.response_code()),
        answers,
    })
}

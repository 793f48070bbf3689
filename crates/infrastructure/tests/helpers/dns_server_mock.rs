#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock upstream does with each received query.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Never answer, forcing the client timeout.
    Timeout,
    /// Reply NOERROR with a single A record.
    AnswerA(Ipv4Addr),
    /// Reply with the given response code and no answers.
    Reply(ResponseCode),
}

pub struct MockUpstream {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn start(behavior: MockBehavior) -> std::io::Result<(Self, SocketAddr)> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { break };
                        if let Some(response) = Self::build_response(&buf[..len], behavior) {
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(query_bytes: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        let query = Message::from_vec(query_bytes).ok()?;

        let (code, answer_ip) = match behavior {
            MockBehavior::Timeout => return None,
            MockBehavior::AnswerA(ip) => (ResponseCode::NoError, Some(ip)),
            MockBehavior::Reply(code) => (code, None),
        };

        let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
        response.set_recursion_desired(query.recursion_desired());
        response.set_recursion_available(true);
        response.set_response_code(code);
        response.add_queries(query.queries().to_vec());

        if let Some(ip) = answer_ip {
            let name = query.queries().first()?.name().clone();
            response.add_answer(Record::from_rdata(name, 60, RData::A(A(ip))));
        }

        let mut bytes = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut bytes);
        response.emit(&mut encoder).ok()?;
        Some(bytes)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

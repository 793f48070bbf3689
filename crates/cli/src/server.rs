use std::net::SocketAddr;
use std::time::Duration;

use hickory_server::ServerFuture;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;
use warden_dns_infrastructure::dns::server::WardenRequestHandler;

const TCP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Bind the UDP and TCP listeners and serve until the process is stopped.
/// Wire framing and per-connection handling belong to hickory-server; every
/// decoded query lands in the request handler.
pub async fn run_dns_server(
    bind_addr: String,
    handler: WardenRequestHandler,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, TCP_REQUEST_TIMEOUT);

    info!(bind_address = %socket_addr, "DNS server ready (UDP + TCP)");

    server.block_until_done().await?;
    Ok(())
}

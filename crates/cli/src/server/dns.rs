use hickory_server::ServerFuture;
use quartz_dns_infrastructure::dns::QuartzDnsHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// TCP connections are dropped after this long without traffic.
const TCP_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn start_dns_server(
    bind_addr: String,
    handler: QuartzDnsHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let mut server = ServerFuture::new(handler);

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    info!(addr = %socket_addr, "DNS UDP listening");
    server.register_socket(udp_socket);

    let tcp_listener = TcpListener::bind(socket_addr).await?;
    info!(addr = %socket_addr, "DNS TCP listening");
    server.register_listener(tcp_listener, TCP_TIMEOUT);

    info!("DNS server ready to serve queries");

    tokio::select! {
        _ = shutdown.cancelled() => {
            info!("DNS server shutdown requested");
        }
        result = server.block_until_done() => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
            }
        }
    }

    info!("DNS server stopped");
    Ok(())
}

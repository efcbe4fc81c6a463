use ferrous_cname_application::use_cases::InjectCnameUseCase;
use ferrous_cname_domain::StageResponse;
use ferrous_cname_infrastructure::dns::UdpForwarder;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const MAX_UDP_QUERY_SIZE: usize = 4096;

/// UDP front end. Queries the CNAME stage answers are replied to directly;
/// everything else is relayed to the upstream resolver unchanged.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    use_case: Arc<InjectCnameUseCase>,
    forwarder: Arc<UdpForwarder>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket = Arc::new(UdpSocket::bind(bind_addr).await?);

    info!(
        bind_address = %bind_addr,
        upstream = %forwarder.server_addr(),
        "DNS server ready"
    );

    let mut recv_buf = [0u8; MAX_UDP_QUERY_SIZE];

    loop {
        let (len, from) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("DNS server shutting down");
                return Ok(());
            }
            received = socket.recv_from(&mut recv_buf) => match received {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP receive failed");
                    continue;
                }
            },
        };

        let query: Arc<[u8]> = Arc::from(&recv_buf[..len]);
        let socket = socket.clone();
        let use_case = use_case.clone();
        let forwarder = forwarder.clone();

        tokio::spawn(async move {
            handle_query(&socket, &use_case, &forwarder, &query, from).await;
        });
    }
}

async fn handle_query(
    socket: &UdpSocket,
    use_case: &InjectCnameUseCase,
    forwarder: &UdpForwarder,
    query: &[u8],
    from: SocketAddr,
) {
    let request_id = format!("{:08x}", fastrand::u32(..));

    let reply = match use_case.execute_wire(&request_id, query) {
        StageResponse::Answer { wire, .. } => wire,
        StageResponse::Empty => match forward(forwarder, &request_id, query).await {
            Some(reply) => reply,
            None => return,
        },
        StageResponse::Error { stage, error } => {
            warn!(
                request_id = %request_id,
                stage,
                error = %error,
                "Stage failed, resolving upstream"
            );
            match forward(forwarder, &request_id, query).await {
                Some(reply) => reply,
                None => return,
            }
        }
    };

    if let Err(e) = socket.send_to(&reply, from).await {
        error!(request_id = %request_id, client = %from, error = %e, "Failed to send response");
    }
}

async fn forward(forwarder: &UdpForwarder, request_id: &str, query: &[u8]) -> Option<Vec<u8>> {
    match forwarder.forward(query).await {
        Ok(reply) => {
            debug!(request_id = %request_id, bytes = reply.len(), "Upstream reply relayed");
            Some(reply)
        }
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "Upstream query failed");
            None
        }
    }
}

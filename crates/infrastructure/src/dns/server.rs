use crate::dns::answers;
use hickory_proto::op::{OpCode, ResponseCode};
use hickory_proto::rr::DNSClass;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use quartz_dns_application::use_cases::ResolveQueryUseCase;
use quartz_dns_domain::{RecordType, ServerStats};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Authoritative front end: maps wire queries onto the resolution engine
/// and synthesizes answer records from stored rows.
pub struct QuartzDnsHandler {
    resolve: Arc<ResolveQueryUseCase>,
    stats: Arc<ServerStats>,
}

impl QuartzDnsHandler {
    pub fn new(resolve: Arc<ResolveQueryUseCase>, stats: Arc<ServerStats>) -> Self {
        Self { resolve, stats }
    }

    fn normalize_name(name: &str) -> String {
        name.trim_end_matches('.').to_string()
    }
}

#[async_trait::async_trait]
impl RequestHandler for QuartzDnsHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        self.stats.record_query();

        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        if request.header().op_code() != OpCode::Query {
            warn!(op_code = ?request.header().op_code(), "Unsupported opcode");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp).await;
        }

        let query = &request_info.query;

        if query.query_class() != DNSClass::IN {
            warn!(query_class = ?query.query_class(), "Unsupported query class");
            return send_error_response(request, &mut response_handle, ResponseCode::Refused)
                .await;
        }

        let name = Self::normalize_name(&query.name().to_utf8());
        let wire_type = query.query_type();
        let client_ip = request.src().ip();

        info!(name = %name, record_type = ?wire_type, client = %client_ip, "DNS query received");

        let record_type = match RecordType::from_u16(u16::from(wire_type)) {
            Some(rt) => rt,
            None => {
                warn!(record_type = ?wire_type, "Unsupported record type");
                return send_error_response(request, &mut response_handle, ResponseCode::NotImp)
                    .await;
            }
        };

        let zone = match self.resolve.resolve_zone(&name).await {
            Ok(Some(zone)) => zone,
            Ok(None) => {
                debug!(name = %name, "No authoritative zone for query");
                self.stats.record_nxdomain();
                return send_error_response(request, &mut response_handle, ResponseCode::NXDomain)
                    .await;
            }
            Err(e) => {
                error!(error = %e, name = %name, "Zone lookup failed");
                self.stats.record_servfail();
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let records = match self.resolve.execute(&zone, &name, record_type).await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, zone = %zone, name = %name, "Query resolution failed");
                self.stats.record_servfail();
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let mut answers = Vec::with_capacity(records.len());
        for record in &records {
            match answers::synthesize(record) {
                Ok(answer) => answers.push(answer),
                Err(e) => {
                    warn!(error = %e, record_id = ?record.id, "Skipping unanswerable record");
                }
            }
        }

        // Name-error covers both "nothing stored" and "nothing answerable".
        if answers.is_empty() {
            debug!(zone = %zone, name = %name, record_type = %record_type, "No records found");
            self.stats.record_nxdomain();
            return send_error_response(request, &mut response_handle, ResponseCode::NXDomain)
                .await;
        }

        debug!(zone = %zone, name = %name, answers = answers.len(), "Sending response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_authoritative(true);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_authoritative(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}

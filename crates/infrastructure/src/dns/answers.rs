use hickory_proto::rr::rdata;
use hickory_proto::rr::{Name, RData, Record as WireRecord};
use quartz_dns_domain::record_name;
use quartz_dns_domain::{CaaData, DomainError, Record, RecordType, SoaData, SrvData};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use url::Url;

/// Turns a stored record into a wire answer. A failure here drops the one
/// record; the caller answers with whatever else the set holds.
pub fn synthesize(record: &Record) -> Result<WireRecord, DomainError> {
    let name = parse_name(&record.name)?;
    let rdata = rdata_for(record)?;
    Ok(WireRecord::from_rdata(name, record.ttl, rdata))
}

fn rdata_for(record: &Record) -> Result<RData, DomainError> {
    match record.record_type {
        RecordType::A => {
            let addr = record.content.parse::<Ipv4Addr>().map_err(|e| {
                DomainError::MalformedRecordContent(format!("A: {}", e))
            })?;
            Ok(RData::A(rdata::A(addr)))
        }
        RecordType::AAAA => {
            let addr = record.content.parse::<Ipv6Addr>().map_err(|e| {
                DomainError::MalformedRecordContent(format!("AAAA: {}", e))
            })?;
            Ok(RData::AAAA(rdata::AAAA(addr)))
        }
        RecordType::CNAME => Ok(RData::CNAME(rdata::CNAME(parse_name(&record.content)?))),
        RecordType::NS => Ok(RData::NS(rdata::NS(parse_name(&record.content)?))),
        RecordType::PTR => Ok(RData::PTR(rdata::PTR(parse_name(&record.content)?))),
        RecordType::MX => Ok(RData::MX(rdata::MX::new(
            record.priority,
            parse_name(&record.content)?,
        ))),
        RecordType::TXT => Ok(RData::TXT(rdata::TXT::new(vec![record.content.clone()]))),
        RecordType::SOA => {
            let soa = SoaData::from_content(&record.content)?;
            Ok(RData::SOA(rdata::SOA::new(
                parse_name(&soa.mname)?,
                parse_name(&soa.rname)?,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum,
            )))
        }
        RecordType::SRV => {
            let srv = SrvData::from_content(&record.content)?;
            Ok(RData::SRV(rdata::SRV::new(
                srv.priority,
                srv.weight,
                srv.port,
                parse_name(&srv.target)?,
            )))
        }
        RecordType::CAA => caa_rdata(&CaaData::from_content(&record.content)?),
    }
}

fn caa_rdata(caa: &CaaData) -> Result<RData, DomainError> {
    // Flag 128 marks the property critical, everything else is reserved.
    let issuer_critical = caa.flag != 0;

    let rdata = match caa.tag.as_str() {
        "issue" => rdata::CAA::new_issue(issuer_critical, issuer_name(&caa.value)?, Vec::new()),
        "issuewild" => {
            rdata::CAA::new_issuewild(issuer_critical, issuer_name(&caa.value)?, Vec::new())
        }
        "iodef" => {
            let url = Url::parse(&caa.value).map_err(|e| {
                DomainError::MalformedRecordContent(format!("CAA: invalid iodef url: {}", e))
            })?;
            rdata::CAA::new_iodef(issuer_critical, url)
        }
        tag => {
            return Err(DomainError::MalformedRecordContent(format!(
                "CAA: unsupported tag '{}'",
                tag
            )))
        }
    };

    Ok(RData::CAA(rdata))
}

fn issuer_name(value: &str) -> Result<Option<Name>, DomainError> {
    // An empty issuer value means no authority may issue.
    if value.is_empty() {
        return Ok(None);
    }
    parse_name(value).map(Some)
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(&record_name::to_fqdn(name))
        .map_err(|e| DomainError::MalformedRecordContent(format!("invalid name '{}': {}", name, e)))
}

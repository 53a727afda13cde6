use std::time::Instant;

use serde_json::{Value, json};

use despacho_extract::{ERROR_KIND, KIND_FIELD};

use crate::ticket::TicketIssuer;

/// Current UTC time as an RFC 3339 string
pub(crate) fn utc_now() -> String {
    jiff::Timestamp::now().to_string()
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Wrap an extraction record into the response envelope
///
/// `tipo:"error"` records become the error shape; anything else is
/// stamped with `fecha`, given a ticket id, and returned as success.
pub(crate) fn assemble(transcript: &str, record: Value, tickets: &dyn TicketIssuer, started: Instant) -> Value {
    if record.get(KIND_FIELD).and_then(Value::as_str) == Some(ERROR_KIND) {
        let error = record
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown extraction error")
            .to_string();

        tracing::warn!(error = %error, "extraction produced an error record");

        return error_envelope(Some(transcript), &error, started);
    }

    success_envelope(transcript, record, tickets, started)
}

fn success_envelope(transcript: &str, mut order: Value, tickets: &dyn TicketIssuer, started: Instant) -> Value {
    // fecha is stamped before the ticket hash, so the ticket covers it
    if let Some(map) = order.as_object_mut() {
        map.insert("fecha".to_string(), Value::String(utc_now()));
    }

    let ticket_id = tickets.issue(&order);

    json!({
        "status": "success",
        "transcript": transcript,
        "order": order,
        "ticket_id": ticket_id,
        "processing_time_ms": elapsed_ms(started),
    })
}

pub(crate) fn error_envelope(transcript: Option<&str>, error: &str, started: Instant) -> Value {
    let mut envelope = json!({
        "status": "error",
        "error": error,
        "processing_time_ms": elapsed_ms(started),
    });

    if let (Some(text), Some(map)) = (transcript, envelope.as_object_mut()) {
        map.insert("transcript".to_string(), Value::String(text.to_string()));
    }

    envelope
}

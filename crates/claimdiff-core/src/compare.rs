//! Compare pipeline: load both claims, diff them, render the report.

use crate::claim::load_claim_file;
use crate::config::{CompareConfig, OutputFormat};
use crate::diff::render::{render_json, render_text};
use crate::errors::{ExError, ExErrorKind};
use crate::{log_op_end, log_op_error, log_op_start};
use std::io::Write;
use std::time::Instant;

pub use crate::diff::engine::compare_claims;

/// Run one comparison and write the rendered report to `sink`.
///
/// Both claims are loaded before any comparison; nothing is written when
/// either fails. Every error carries the config's request id.
///
/// # Errors
///
/// - `Io`: a claim file cannot be read, or the sink rejects the write
/// - `InvalidClaim` / `MissingField`: a claim file is malformed
/// - any error of [`compare_claims`] or [`render_json`]
pub fn execute<W: Write>(config: &CompareConfig, mut sink: W) -> Result<(), ExError> {
    let start = Instant::now();
    log_op_start!("execute", request_id = %config.request_id);

    let result = run(config, &mut sink).map_err(|e| e.with_request_id(config.request_id.clone()));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!(
            "execute",
            duration_ms = duration_ms,
            request_id = %config.request_id
        ),
        Err(e) => log_op_error!(
            "execute",
            e.clone(),
            duration_ms = duration_ms,
            request_id = %config.request_id
        ),
    }
    result
}

fn run<W: Write>(config: &CompareConfig, sink: &mut W) -> Result<(), ExError> {
    let claim1 = load_claim_file(&config.claim1)?;
    let claim2 = load_claim_file(&config.claim2)?;

    let report = compare_claims(&claim1, &claim2)?;

    let rendered = match config.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => {
            let mut json = render_json(&report)?;
            json.push('\n');
            json
        }
    };

    sink.write_all(rendered.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("execute")
                .with_message(format!("failed to write report: {}", e))
        })
}

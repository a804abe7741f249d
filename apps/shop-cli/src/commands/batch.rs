//! # Batch Command
//!
//! Drives [`purchase`] over JSON-lines input against one store.
//!
//! One response line per non-blank input line. A failed request never stops
//! the batch; only I/O errors do.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use shop_core::{PurchaseRequest, Receipt};
use tracing::{debug, info, warn};

use crate::commands::purchase;
use crate::error::ApiError;
use crate::state::ShopState;

/// Outcome of one request, serialized as either the receipt or the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Ok(Receipt),
    Err(ApiError),
}

impl From<Result<Receipt, ApiError>> for Response {
    fn from(result: Result<Receipt, ApiError>) -> Self {
        match result {
            Ok(receipt) => Response::Ok(receipt),
            Err(err) => Response::Err(err),
        }
    }
}

/// Counters for the end-of-batch log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Decodes and runs one request line.
pub fn handle_line(state: &ShopState, line: &str) -> Response {
    match serde_json::from_str::<PurchaseRequest>(line) {
        Ok(request) => purchase(state, &request).into(),
        Err(e) => {
            warn!(error = %e, "Malformed request line");
            Response::Err(ApiError::malformed(&e))
        }
    }
}

/// Runs every request in `input`, writing one JSON response per line to `output`.
pub fn run_batch<R, W>(state: &ShopState, input: R, mut output: W) -> io::Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(state, &line);
        match &response {
            Response::Ok(_) => summary.succeeded += 1,
            Response::Err(err) => {
                debug!(line = index + 1, code = ?err.code, "Request failed");
                summary.failed += 1;
            }
        }

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
    }

    output.flush()?;
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Batch finished"
    );
    Ok(summary)
}

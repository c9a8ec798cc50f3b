//! Parallel batch processing over independent documents.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use serde_json::Value as JsonValue;

use crate::types::{BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchStats};

/// Runs `process` over every input document.
///
/// Documents are processed in parallel when `continueOnError` is true (the
/// default). Otherwise they are processed in order and the batch stops after the
/// first failure. Results always follow input order.
pub fn run_batch<F>(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
    process: F,
) -> BatchProcessingResult
where
    F: Fn(&JsonValue) -> napi::Result<JsonValue> + Sync,
{
    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);

    let pool = opts.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    });

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        match process(&input.document) {
            Ok(result) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(result),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log::debug!("Batch document `{}` failed: {}", input.id, e);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        match &pool {
            Some(pool) => pool.install(|| inputs.into_par_iter().map(&process_input).collect()),
            None => inputs.into_par_iter().map(&process_input).collect(),
        }
    } else {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let had_error = result.error.is_some();
            results.push(result);
            if had_error {
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();
    let stats = BatchStats {
        total,
        succeeded: succeeded.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
        processing_time_ms: elapsed.as_secs_f64() * 1000.0,
    };
    log::debug!(
        "Processed {}/{} documents ({} failed) in {:.2}ms",
        stats.succeeded,
        stats.total,
        stats.failed,
        stats.processing_time_ms
    );

    BatchProcessingResult { results, stats }
}

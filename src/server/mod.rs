//! HTTP server adapters
//!
//! Translates between HTTP frameworks and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight HTTP server

pub mod tiny_http;

use std::sync::Arc;

use log::{error, info};

use crate::verify::VerificationPipeline;

/// Serve the gateway until the process is stopped
///
/// Requests are pulled off a shared listener by a small fixed pool of
/// worker threads. The pipeline holds no per-request state, so workers
/// share one instance behind an `Arc`.
pub fn serve(port: u16, workers: usize, pipeline: VerificationPipeline) -> anyhow::Result<()> {
    let server = ::tiny_http::Server::http(("0.0.0.0", port))
        .map_err(|e| anyhow::anyhow!("failed to bind port {port}: {e}"))?;
    let server = Arc::new(server);
    let pipeline = Arc::new(pipeline);

    info!("Optic API running on http://localhost:{port}");

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers.max(1) {
        let server = Arc::clone(&server);
        let pipeline = Arc::clone(&pipeline);
        handles.push(std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let response = tiny_http::handle_api_request(&pipeline, &mut request);
                if let Err(e) = request.respond(response) {
                    error!("failed to send response: {e}");
                }
            }
        }));
    }

    for handle in handles {
        handle.join().map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
    }

    Ok(())
}

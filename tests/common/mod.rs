#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use indicators::error::IndicatorError;
use indicators::net::{RawResponse, Transport, TransportError};
use indicators::runner::Handlers;
use tokio::sync::mpsc;

/// Transport that answers every GET with the same canned outcome.
#[derive(Debug, Clone)]
pub struct CannedTransport {
    outcome: Result<(u16, Vec<u8>), TransportError>,
    calls: Arc<AtomicUsize>,
}

impl CannedTransport {
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::raw(status, body.to_string().into_bytes())
    }

    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            outcome: Ok((status, body.into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            outcome: Err(TransportError::Connect("no route to host".into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for CannedTransport {
    async fn get(&self, _url: &str) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (status, body) = self.outcome.clone()?;
        Ok(RawResponse::new(status, body))
    }
}

/// Every handler invocation of one call site, in arrival order.
pub type Outcomes<V> = mpsc::UnboundedReceiver<Result<V, IndicatorError>>;

/// Handlers that forward each invocation into a channel.
pub fn recording_handlers<V: Send + 'static>() -> (
    Handlers<impl FnOnce(V) + Send + 'static, impl FnOnce(IndicatorError) + Send + 'static>,
    Outcomes<V>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let failure_tx = tx.clone();
    let handlers = Handlers::new(
        move |v: V| {
            let _ = tx.send(Ok(v));
        },
        move |e: IndicatorError| {
            let _ = failure_tx.send(Err(e));
        },
    );
    (handlers, rx)
}

/// Drain a closed channel. Call after the producing tasks have finished.
pub fn drain<V>(rx: &mut Outcomes<V>) -> Vec<Result<V, IndicatorError>> {
    let mut out = Vec::new();
    while let Ok(item) = rx.try_recv() {
        out.push(item);
    }
    out
}

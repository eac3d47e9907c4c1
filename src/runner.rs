//! Startup runner: fires Call A and Call B as independent tasks.
//!
//! Each call owns its request and reports through its own pair of handlers.
//! Exactly one handler of the pair runs, exactly once. Nothing is shared
//! between the two tasks and their completions are unordered.

use std::future::Future;

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::Endpoints;
use crate::error::IndicatorError;
use crate::indicators::{current_uf, list_indicators, uf_message};
use crate::net::{HttpJsonClient, Transport};

/// Success consumer and failure handler for one call site.
pub struct Handlers<S, E> {
    pub on_success: S,
    pub on_failure: E,
}

impl<S, E> Handlers<S, E> {
    pub fn new(on_success: S, on_failure: E) -> Self {
        Self {
            on_success,
            on_failure,
        }
    }
}

/// Spawn `call` and route its outcome to one of `handlers`.
pub fn spawn_call<F, V, S, E>(call: F, handlers: Handlers<S, E>) -> JoinHandle<()>
where
    F: Future<Output = Result<V, IndicatorError>> + Send + 'static,
    V: Send + 'static,
    S: FnOnce(V) + Send + 'static,
    E: FnOnce(IndicatorError) + Send + 'static,
{
    tokio::spawn(async move {
        match call.await {
            Ok(value) => (handlers.on_success)(value),
            Err(err) => (handlers.on_failure)(err),
        }
    })
}

/// Start Call A and Call B without waiting on each other, then wait for both.
pub async fn run_startup<T, SA, EA, SB, EB>(
    client: HttpJsonClient<T>,
    endpoints: Endpoints,
    list: Handlers<SA, EA>,
    uf: Handlers<SB, EB>,
) where
    T: Transport + Clone + 'static,
    SA: FnOnce(Value) + Send + 'static,
    EA: FnOnce(IndicatorError) + Send + 'static,
    SB: FnOnce(f64) + Send + 'static,
    EB: FnOnce(IndicatorError) + Send + 'static,
{
    let list_task = {
        let client = client.clone();
        let endpoints = endpoints.clone();
        spawn_call(
            async move { list_indicators(&client, &endpoints).await },
            list,
        )
    };

    let uf_task = spawn_call(async move { current_uf(&client, &endpoints).await }, uf);

    let (list_done, uf_done) = tokio::join!(list_task, uf_task);
    for (call, done) in [("list_indicators", list_done), ("current_uf", uf_done)] {
        if let Err(e) = done {
            warn!(call, error = %e, "Startup call task did not complete");
        }
    }
}

/// Handlers for Call A that write to the diagnostic log.
pub fn list_console_handlers()
-> Handlers<impl FnOnce(Value) + Send + 'static, impl FnOnce(IndicatorError) + Send + 'static> {
    Handlers::new(
        |data: Value| info!("Datos obtenidos: {data}"),
        |err: IndicatorError| error!(kind = err.kind(), "Error al obtener los datos: {err}"),
    )
}

/// Handlers for Call B that write to the diagnostic log.
pub fn uf_console_handlers()
-> Handlers<impl FnOnce(f64) + Send + 'static, impl FnOnce(IndicatorError) + Send + 'static> {
    Handlers::new(
        |value: f64| info!("{}", uf_message(value)),
        |err: IndicatorError| error!(kind = err.kind(), "Error al obtener la UF: {err}"),
    )
}

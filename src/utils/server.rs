use tokio::signal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

const DEFAULT_LOG_FILTER: &str = "info,design_vault=debug,tower_http=info,hyper=warn,sea_orm=warn";

/// Installs the global subscriber. Output is JSON unless `LOG_FORMAT=pretty`.
pub fn init_tracing() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let pretty = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "pretty");

    let json_layer = (!pretty).then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_file(false)
            .with_target(true)
            .with_line_number(false)
    });
    let pretty_layer = pretty.then(|| fmt::layer().pretty().with_target(true));

    Ok(tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()?)
}

/// OS signal that ended the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    pub fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Resolves once the process is asked to stop. A listener that cannot be
/// installed is logged and never fires; the other one still can.
pub async fn shutdown_signal() {
    let received = tokio::select! {
        () = interrupt() => ShutdownSignal::Interrupt,
        () = terminate() => ShutdownSignal::Terminate,
    };

    tracing::warn!(signal = received.name(), "Shutdown requested, draining connections");
}

async fn interrupt() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Could not listen for SIGINT");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

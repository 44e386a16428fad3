//! OS signal handling.
//!
//! SIGINT (Ctrl+C) and, on unix, SIGTERM both request shutdown.

use std::io;

/// Resolve once a termination signal arrives.
pub async fn wait_for_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res?,
            _ = term.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    tracing::info!("Termination signal received");
    Ok(())
}

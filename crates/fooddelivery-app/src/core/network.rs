//! Network status probe.
//!
//! Pengganti platform NetInfo: background task yang periodically coba
//! TCP connect ke probe address. Hasilnya display-only (banner), tidak
//! pernah mempengaruhi behavior store.

use crate::core::config::NetworkConfig;
use crate::events::AppEvent;
use eframe::egui;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time;
use tracing::debug;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Spawn the connectivity monitor. Berhenti sendiri saat UI channel closed.
pub fn spawn_monitor(
    config: NetworkConfig,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    ctx: egui::Context,
) {
    tokio::spawn(async move {
        let interval = Duration::from_secs(config.probe_interval_secs.max(1));
        loop {
            let connected = time::timeout(PROBE_TIMEOUT, TcpStream::connect(config.probe_addr.as_str()))
                .await
                .map(|result| result.is_ok())
                .unwrap_or(false);

            debug!(addr = %config.probe_addr, connected, "network probe");
            if event_tx
                .send(AppEvent::NetworkStatusChange(Some(connected)))
                .is_err()
            {
                break; // UI sudah shutdown
            }
            ctx.request_repaint();

            time::sleep(interval).await;
        }
    });
}

use clockface_clock::{Clock, SystemClock};
use clockface_core::DialAngles;
use clockface_widget::{ClockConfig, ClockWidget};
use std::sync::Arc;

mod log_view;

use log_view::LogView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = Arc::new(SystemClock::new());
    let start = clock.now();
    log::info!("Starting clock at {} ({:?})", start, DialAngles::from_timestamp(&start));

    let widget = ClockWidget::activate(clock, ClockConfig::default())?;
    let binding = widget.bind(LogView::new())?;

    tokio::signal::ctrl_c().await?;
    log::info!("Interrupted, shutting down...");

    widget.deactivate();
    let view = binding.await?;

    log::info!(
        "Clock stopped after {} ticks, {} hand updates",
        widget.ticks(),
        view.state().updates
    );

    Ok(())
}

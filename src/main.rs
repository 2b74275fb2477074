mod config;     // robot profile and sample loading
mod sampling;   // queries a policy over configured samples

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

use crate::config::{DEFAULT_CONFIG_PATH, load_settings};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    info!(%path, "Pathlimits started. Loading robot profile...");

    let settings = load_settings(&path)
        .with_context(|| format!("failed to load robot profile from {}", path))?;
    let constraints = settings
        .drive
        .build()
        .context("robot profile has invalid drive limits")?;
    info!(%constraints, point_turn = ?constraints.point_turn(), "Drive constraints ready");

    if settings.samples.is_empty() {
        warn!("No samples configured; nothing to evaluate.");
        return Ok(());
    }

    let bounds = sampling::evaluate(&constraints, &settings.samples);
    for bound in &bounds {
        info!(
            heading_deriv = bound.pose_deriv.heading,
            max_velocity = bound.max_velocity,
            max_acceleration = bound.max_acceleration,
            "Sample bounds"
        );
    }
    info!(
        evaluated = bounds.len(),
        skipped = settings.samples.len() - bounds.len(),
        "Evaluation complete."
    );

    Ok(())
}

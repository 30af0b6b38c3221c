//! Test utilities for the Orbit SDK crates.

pub mod logs;

pub mod source;

use std::sync::Once;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber. Safe to call from every test.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

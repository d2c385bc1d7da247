pub mod fakes;
pub mod postgres;

pub use fakes::{FailingCache, FailingSource, FakeSource, memory_cache};
pub use postgres::TestPostgresContainer;

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

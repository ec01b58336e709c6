//! Utilities shared by the integration tests of the workspace.

#![warn(unused_crate_dependencies, unreachable_pub)]

mod populators;
pub use populators::{CountingPopulator, FailingPopulator};

mod randomizers;
pub use randomizers::ScriptedBytes;

/// Initializes tracing for tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

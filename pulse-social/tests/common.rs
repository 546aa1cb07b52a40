use pulse_common::observability::{LogConfig, init_logging};

pub fn init_test_tracing() {
    let _ = init_logging(LogConfig {
        default_filter: "debug",
        ..LogConfig::default()
    });
}

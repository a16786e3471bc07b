//! Browser console logging.
//!
//! Routes `tracing` events to the devtools console. Native builds (unit
//! tests) skip installation so the test harness keeps its own output.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// Installs the console subscriber. Later calls are no-ops.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        #[cfg(target_arch = "wasm32")]
        init_web_logging(level);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = level;
    });
}

#[cfg(target_arch = "wasm32")]
fn init_web_logging(level: LevelFilter) {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time();

    tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .init();
}

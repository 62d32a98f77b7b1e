pub mod build_info;

use std::sync::Once;

use tracing_subscriber::filter::Directive;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: [&str; 3] = [
    "earnings_tracker=info",
    "earnings_core=info",
    "earnings_storage_sqlite=info",
];

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` is honoured; `extra` (from the config file or `EARNINGS_LOG`) is added on top.
pub fn init_tracing(extra: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        for directive in DEFAULT_DIRECTIVES.iter().copied().chain(extra) {
            match directive.parse::<Directive>() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(err) => eprintln!("ignoring log filter `{directive}`: {err}"),
            }
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

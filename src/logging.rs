use tracing_subscriber::EnvFilter;

/// Target of the binary itself; the run report is emitted here.
const BIN_TARGET: &str = "loocv";

/// Library crate targets that should receive log output.
const LIB_TARGETS: &[&str] = &["loocv_evaluate", "loocv_io", "loocv_knn"];

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping for the library crates:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// The binary target never drops below info so the report is always shown.
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let bin_level = if verbosity == 0 { "info" } else { level };

    std::iter::once(format!("{BIN_TARGET}={bin_level}"))
        .chain(LIB_TARGETS.iter().map(|t| format!("{t}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

use env_logger::Env;
use std::io::Write;

/// Install the stderr logger, filtered by `RUST_LOG` (errors only when unset).
///
/// Calling it twice is harmless; the second call leaves the first logger in place.
pub fn init_logging() {
    let result = env_logger::Builder::from_env(Env::default())
        .format(|buf, record| {
            // "zdiff::artifacts::diff::hunk" -> "artifacts/diff/hunk"
            let target = record.target();
            let target = target
                .strip_prefix("zdiff::")
                .unwrap_or(target)
                .replace("::", "/");

            writeln!(
                buf,
                "[{}] {} - {}:{} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                target,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    if result.is_err() {
        log::trace!("logger already initialized");
    }
}

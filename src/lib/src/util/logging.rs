use env_logger::Env;
use std::io::Write;

/// Path of the enclosing function, handy as a log prefix
#[macro_export]
macro_rules! current_function {
    () => {{
        fn here() {}
        let name = std::any::type_name_of_val(&here);
        name.strip_suffix("::here").unwrap_or(name)
    }};
}

const CRATE_PREFIXES: [&str; 2] = ["libformdrop::", "formdrop_server::"];

/// Module path without our crate names, "libformdrop::storage::local" -> "storage::local"
fn short_target(target: &str) -> &str {
    CRATE_PREFIXES
        .iter()
        .find_map(|prefix| target.strip_prefix(prefix))
        .unwrap_or(target)
}

/// Initialize env_logger at `warn` unless RUST_LOG says otherwise
pub fn init_logging() {
    init_logging_with_default("warn")
}

pub fn init_logging_with_default(default_filter: &str) {
    let result = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:<5}] {} - {} ({}:{}) {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                short_target(record.target()),
                record
                    .file()
                    .and_then(|file| file.rsplit('/').next())
                    .unwrap_or("?"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    // Tests call this once per test, only the first one installs the logger
    if result.is_err() {
        log::trace!("Logger already initialized");
    }
}

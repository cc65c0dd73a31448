//! Logging setup.
//!
//! All modules log through the `log` facade with a bracketed subsystem
//! prefix (`[HITBOX]`, `[CURSOR]`, `[CONFIG]`). This installs `env_logger`
//! as the backend, honouring `RUST_LOG` when set.

use std::io::Write;

use chrono::Local;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install the logger. Calling it again is harmless; only the first call
/// takes effect.
pub fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);

    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logging initialized (default filter: {})", default_filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(DEFAULT_FILTER);
        init_logging("trace");
        log::info!("logger still usable");
    }
}

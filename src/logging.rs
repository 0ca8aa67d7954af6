use std::backtrace::Backtrace;

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, util::SubscriberInitExt};

/// Installs the generator's subscriber and panic hook.
pub fn init_tracing(log_level: &str) {
    subscriber(log_level).init();
    set_panic_hook();
}

/// Progress lines go to stderr so generated source piped from stdout stays
/// clean. `RUST_LOG` wins over the configured level.
pub fn subscriber(log_level: &str) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
            *message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };

        let backtrace = Backtrace::capture();

        if let Some(location) = info.location() {
            tracing::error!(
                panic = %message,
                location = %location,
                backtrace = %backtrace,
                "panic"
            );
        } else {
            tracing::error!(panic = %message, backtrace = %backtrace, "panic");
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::subscriber;

    #[test]
    fn subscriber_honours_configured_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let subscriber = subscriber("poco_gen=warn");
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(tracing::Level::WARN));
            assert!(!tracing::enabled!(tracing::Level::DEBUG));
        });
    }
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// The library and the `ticket-estimate` binary log under different targets.
const LOG_TARGETS: &[&str] = &["ticket_estimator", "ticket_estimate"];

pub fn init_cli_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    init_logger_with_level(level);
}

/// Initializes the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logger_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn default_filter(level: &str) -> EnvFilter {
    let directives = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};

    #[derive(Clone, Default)]
    struct TargetRecorder {
        targets: Arc<Mutex<Vec<String>>>,
    }

    impl<S: Subscriber> Layer<S> for TargetRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if let Ok(mut targets) = self.targets.lock() {
                targets.push(event.metadata().target().to_string());
            }
        }
    }

    #[test]
    fn test_default_filter_enables_library_and_binary_targets() {
        let recorder = TargetRecorder::default();
        let subscriber = tracing_subscriber::registry()
            .with(default_filter("debug"))
            .with(recorder.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "ticket_estimator::domain::ticket", "library");
            tracing::error!(target: "ticket_estimate", "binary");
            tracing::info!(target: "some_other_crate", "dependency");
            tracing::trace!(target: "ticket_estimate", "too verbose");
        });

        let targets = recorder.targets.lock().unwrap().clone();
        assert_eq!(
            targets,
            vec![
                "ticket_estimator::domain::ticket".to_string(),
                "ticket_estimate".to_string(),
            ]
        );
    }
}

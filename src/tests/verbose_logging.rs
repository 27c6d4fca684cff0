use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::config::settings::{LogFormat, LoggingConfig};
use crate::tests::common::{client_for, test_config};
use crate::utils::logging;

/// In-memory log sink shared with the fmt layer.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `current_track` against a closed port with logging resolved from a
/// `warn` config, the way the binary does on the environment path.
async fn logs_for(verbose: bool) -> String {
    let logs = CapturedLogs::default();
    let resolved = logging::resolve(
        Some(&LoggingConfig::new("warn".to_owned(), LogFormat::Compact)),
        None,
        verbose,
    );
    let writer = logs.clone();
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(&resolved.level))
        .with(fmt::layer().with_ansi(false).with_writer(move || writer.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = client_for("http://127.0.0.1:1", test_config().with_verbose(verbose));
    let _ = client.current_track().await;

    logs.contents()
}

#[tokio::test]
async fn verbose_client_logs_entered_operations() {
    let output = logs_for(true).await;
    assert!(output.contains("entering"), "{}", output);
    assert!(output.contains("current_track"), "{}", output);
    assert!(output.contains("refresh_access_token"), "{}", output);
}

#[tokio::test]
async fn quiet_client_logs_nothing_at_warn() {
    let output = logs_for(false).await;
    assert!(!output.contains("entering"), "{}", output);
}

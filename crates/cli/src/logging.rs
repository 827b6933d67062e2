use chatdesk_core::config::{AppConfig, LogFormat};
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the conversation. A subscriber installed earlier stays in place.
pub fn init(config: &AppConfig) {
    let _ = tracing::subscriber::set_global_default(subscriber(config, std::io::stderr));
}

pub fn max_level(config: &AppConfig) -> Level {
    config.logging.level.parse::<Level>().unwrap_or(Level::ERROR)
}

pub fn subscriber<W>(config: &AppConfig, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(false)
        .with_max_level(max_level(config));

    match config.logging.format {
        LogFormat::Compact => Box::new(builder.compact().finish()),
        LogFormat::Pretty => Box::new(builder.pretty().finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chatdesk_agent::handlers::joke_reply;
    use chatdesk_agent::{GenerationError, LlmClient};
    use chatdesk_core::config::AppConfig;
    use chatdesk_core::domain::session::Session;
    use chatdesk_core::messages;
    use tracing::Level;

    use super::{max_level, subscriber};

    struct UnreachableLlm;

    #[async_trait]
    impl LlmClient for UnreachableLlm {
        async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Transport(
                "error sending request for url (http://127.0.0.1:9/chat/completions)".to_string(),
            ))
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("log buffer").clone()).expect("utf-8 logs")
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    async fn logs_for_failed_joke(config: &AppConfig) -> String {
        let buffer = SharedBuffer::default();
        let sink = buffer.clone();
        let _guard = tracing::subscriber::set_default(subscriber(config, move || sink.clone()));

        let session = Session::new("Ann", "a@a.com").expect("valid session");
        let reply = joke_reply(&UnreachableLlm, &session).await;
        assert_eq!(reply, messages::GENERATION_FAILED);

        buffer.contents()
    }

    #[test]
    fn default_level_is_error_only() {
        assert_eq!(max_level(&AppConfig::default()), Level::ERROR);
    }

    #[test]
    fn unknown_level_falls_back_to_error() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert_eq!(max_level(&config), Level::ERROR);
    }

    #[tokio::test]
    async fn default_config_keeps_generation_failures_off_the_terminal() {
        let logs = logs_for_failed_joke(&AppConfig::default()).await;
        assert!(logs.is_empty(), "unexpected log output: {logs}");
    }

    #[tokio::test]
    async fn raised_level_reports_generation_failures() {
        let mut config = AppConfig::default();
        config.logging.level = "warn".to_string();

        let logs = logs_for_failed_joke(&config).await;
        assert!(logs.contains("llm.request.failed"), "missing failure event: {logs}");
    }
}

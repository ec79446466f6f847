use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use readme_core::{Effect, GenerationOutcome, Msg};
use readme_engine::{save_document, EngineError, EngineEvent, EngineHandle, EventSink};
use readme_logging::{preview, readme_error, readme_info, readme_warn};

use super::clipboard::{ClipboardWriter, SystemClipboard};
use crate::cli::AppConfig;

/// Executes core effects against the engine, clipboard, timers and file system.
///
/// Every outcome flows back to the UI loop as a `Msg` on `msg_tx`.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn ClipboardWriter>,
    output_dir: PathBuf,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink::new(msg_tx.clone()));
        let engine = EngineHandle::new(config.service.clone(), sink)?;
        Ok(Self::with_parts(
            engine,
            Box::new(SystemClipboard::default()),
            config.output_dir.clone(),
            msg_tx,
        ))
    }

    pub fn with_parts(
        engine: EngineHandle,
        clipboard: Box<dyn ClipboardWriter>,
        output_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            engine,
            clipboard,
            output_dir,
            msg_tx,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::GenerateReadme { repo_url } => {
                    readme_info!("GenerateReadme url_len={} url={}", repo_url.len(), repo_url);
                    self.engine.generate(repo_url);
                }
                Effect::CopyToClipboard { text } => match self.clipboard.write_text(&text) {
                    Ok(()) => {
                        readme_info!("Copied {} characters to clipboard", text.chars().count());
                        let _ = self.msg_tx.send(Msg::CopySucceeded);
                    }
                    Err(err) => {
                        readme_warn!("Failed to copy text: {:#}", err);
                        let _ = self.msg_tx.send(Msg::CopyFailed {
                            reason: format!("{err:#}"),
                        });
                    }
                },
                Effect::ScheduleCopyReset { token, after } => {
                    self.schedule(after, Msg::CopyConfirmationExpired { token });
                }
                Effect::SaveDocument { filename, content } => {
                    match save_document(&self.output_dir, &filename, &content) {
                        Ok(path) => {
                            readme_info!("Saved {} bytes to {:?}", content.len(), path);
                            let _ = self.msg_tx.send(Msg::DocumentSaved {
                                path: path.display().to_string(),
                            });
                        }
                        Err(err) => readme_error!(
                            "Failed to save {} into {:?}: {}",
                            filename,
                            self.output_dir,
                            err
                        ),
                    }
                }
            }
        }
    }

    fn schedule(&self, after: Duration, msg: Msg) {
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            thread::sleep(after);
            let _ = msg_tx.send(msg);
        });
    }
}

/// Forwards engine settlements into the UI message queue.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl MsgSink {
    fn new(tx: mpsc::Sender<Msg>) -> Self {
        Self { tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(settlement_msg(event));
    }
}

fn settlement_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted { repo_url, result } => {
            let outcome = match result {
                Ok(readme) => {
                    readme_info!(
                        "Generated README for {} ({} chars): {}",
                        repo_url,
                        readme.chars().count(),
                        preview(&readme, 80)
                    );
                    GenerationOutcome::Success { readme }
                }
                Err(err) => {
                    readme_warn!("Generation for {} failed ({}): {}", repo_url, err.kind, err);
                    GenerationOutcome::Failure {
                        message: err.message,
                    }
                }
            };
            Msg::GenerationSettled(outcome)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Mutex;

    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use readme_engine::{FailureKind, GenerateError, GenerationClient, GENERIC_FAILURE_MESSAGE};

    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    struct StaticClient(&'static str);

    #[async_trait::async_trait]
    impl GenerationClient for StaticClient {
        async fn generate(&self, _repo_url: &str) -> Result<String, GenerateError> {
            Ok(self.0.to_string())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingClipboard {
        written: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                return Err(anyhow!("no display"));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn runner(
        clipboard: RecordingClipboard,
        output_dir: PathBuf,
    ) -> (EffectRunner, mpsc::Receiver<Msg>) {
        readme_logging::initialize_for_tests();
        let (msg_tx, msg_rx) = mpsc::channel();
        let engine = EngineHandle::with_client(
            Arc::new(StaticClient("# Widgets")),
            Arc::new(MsgSink::new(msg_tx.clone())),
        )
        .unwrap();
        (
            EffectRunner::with_parts(engine, Box::new(clipboard), output_dir, msg_tx),
            msg_rx,
        )
    }

    #[test]
    fn generate_effect_settles_through_engine() {
        let temp = tempfile::TempDir::new().unwrap();
        let (mut runner, rx) = runner(RecordingClipboard::default(), temp.path().to_path_buf());

        runner.run(vec![Effect::GenerateReadme {
            repo_url: "https://github.com/acme/widgets".to_string(),
        }]);

        assert_eq!(
            rx.recv_timeout(WAIT).unwrap(),
            Msg::GenerationSettled(GenerationOutcome::Success {
                readme: "# Widgets".to_string()
            })
        );
    }

    #[test]
    fn copy_success_reports_back() {
        let temp = tempfile::TempDir::new().unwrap();
        let clipboard = RecordingClipboard::default();
        let (mut runner, rx) = runner(clipboard.clone(), temp.path().to_path_buf());

        runner.run(vec![Effect::CopyToClipboard {
            text: "# Widgets".to_string(),
        }]);

        assert_eq!(rx.recv_timeout(WAIT).unwrap(), Msg::CopySucceeded);
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["# Widgets".to_string()]);
    }

    #[test]
    fn copy_failure_reports_reason() {
        let temp = tempfile::TempDir::new().unwrap();
        let clipboard = RecordingClipboard {
            fail: true,
            ..RecordingClipboard::default()
        };
        let (mut runner, rx) = runner(clipboard, temp.path().to_path_buf());

        runner.run(vec![Effect::CopyToClipboard {
            text: "# Widgets".to_string(),
        }]);

        assert_eq!(
            rx.recv_timeout(WAIT).unwrap(),
            Msg::CopyFailed {
                reason: "no display".to_string()
            }
        );
    }

    #[test]
    fn copy_reset_fires_after_delay() {
        let temp = tempfile::TempDir::new().unwrap();
        let (mut runner, rx) = runner(RecordingClipboard::default(), temp.path().to_path_buf());

        runner.run(vec![Effect::ScheduleCopyReset {
            token: 3,
            after: Duration::from_millis(20),
        }]);

        assert_eq!(
            rx.recv_timeout(WAIT).unwrap(),
            Msg::CopyConfirmationExpired { token: 3 }
        );
    }

    #[test]
    fn save_effect_writes_readme_and_reports_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let (mut runner, rx) = runner(RecordingClipboard::default(), temp.path().to_path_buf());

        runner.run(vec![Effect::SaveDocument {
            filename: "README.md".to_string(),
            content: "# Widgets\n".to_string(),
        }]);

        let target = temp.path().join("README.md");
        assert_eq!(fs::read_to_string(&target).unwrap(), "# Widgets\n");
        assert_eq!(
            rx.recv_timeout(WAIT).unwrap(),
            Msg::DocumentSaved {
                path: target.display().to_string()
            }
        );
    }

    #[test]
    fn failed_generation_maps_to_user_message() {
        let msg = settlement_msg(EngineEvent::GenerationCompleted {
            repo_url: "https://github.com/acme/widgets".to_string(),
            result: Err(GenerateError::new(
                FailureKind::HttpStatus(500),
                GENERIC_FAILURE_MESSAGE,
            )),
        });

        assert_eq!(
            msg,
            Msg::GenerationSettled(GenerationOutcome::Failure {
                message: "Failed to generate README".to_string()
            })
        );
    }
}

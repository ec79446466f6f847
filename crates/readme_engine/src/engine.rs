use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use readme_logging::{readme_error, readme_info, readme_warn};

use crate::client::{GenerationClient, ReqwestGenerationClient, ServiceSettings};
use crate::{EngineEvent, FailureKind, GenerateError, INTERRUPTED_MESSAGE};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to set up generation client: {0}")]
    Client(#[from] GenerateError),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
}

enum EngineCommand {
    Generate { repo_url: String },
}

/// Runs generation requests on a background tokio runtime.
///
/// Every accepted request produces exactly one `EngineEvent::GenerationCompleted`
/// on the sink, including when the request task panics or the engine shuts
/// down mid-request.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ServiceSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let client = ReqwestGenerationClient::new(settings)?;
        Self::with_client(Arc::new(client), sink)
    }

    pub fn with_client(
        client: Arc<dyn GenerationClient>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("readme-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, sink).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn generate(&self, repo_url: impl Into<String>) {
        let repo_url = repo_url.into();
        if self
            .cmd_tx
            .send(EngineCommand::Generate { repo_url })
            .is_err()
        {
            readme_error!("Engine thread is gone; generation request dropped");
        }
    }
}

async fn handle_command(
    client: &dyn GenerationClient,
    command: EngineCommand,
    sink: Arc<dyn EventSink>,
) {
    match command {
        EngineCommand::Generate { repo_url } => {
            let guard = SettleGuard::new(repo_url.clone(), sink);
            readme_info!("Generating README for {}", repo_url);
            let result = client.generate(&repo_url).await;
            guard.settle(result);
        }
    }
}

/// Reports a settlement exactly once: explicitly via `settle`, or as an
/// `Aborted` failure when dropped first.
struct SettleGuard {
    repo_url: String,
    sink: Arc<dyn EventSink>,
    settled: bool,
}

impl SettleGuard {
    fn new(repo_url: String, sink: Arc<dyn EventSink>) -> Self {
        Self {
            repo_url,
            sink,
            settled: false,
        }
    }

    fn settle(mut self, result: Result<String, GenerateError>) {
        self.settled = true;
        self.sink.emit(EngineEvent::GenerationCompleted {
            repo_url: std::mem::take(&mut self.repo_url),
            result,
        });
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        readme_warn!("Generation for {} ended without a result", self.repo_url);
        self.sink.emit(EngineEvent::GenerationCompleted {
            repo_url: std::mem::take(&mut self.repo_url),
            result: Err(GenerateError::new(FailureKind::Aborted, INTERRUPTED_MESSAGE)),
        });
    }
}

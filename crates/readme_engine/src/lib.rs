//! README studio engine: generation-service client, background request
//! execution and document persistence.
mod client;
mod engine;
mod persist;
mod types;

pub use client::{
    GenerationClient, ReqwestGenerationClient, ServiceSettings, DEFAULT_SERVICE_URL, GENERATE_PATH,
};
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use persist::{ensure_output_dir, save_document, AtomicFileWriter, PersistError};
pub use types::{
    EngineEvent, FailureKind, GenerateError, GENERIC_FAILURE_MESSAGE, INTERRUPTED_MESSAGE,
};

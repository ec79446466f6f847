#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the repository URL input.
    InputChanged(String),
    /// User asked for a README to be generated from the current input.
    GenerateClicked,
    /// The in-flight generation request finished, one way or another.
    GenerationSettled(GenerationOutcome),
    /// User asked to copy the generated README.
    CopyClicked,
    /// Platform confirmed the clipboard write.
    CopySucceeded,
    /// Platform could not write the clipboard; the view keeps its state.
    CopyFailed { reason: String },
    /// A copy-confirmation timer fired.
    CopyConfirmationExpired { token: u64 },
    /// User asked to download the generated README.
    DownloadClicked,
    /// Platform finished writing the downloaded document.
    DocumentSaved { path: String },
    /// UI/render tick; drives the spinner while loading.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success { readme: String },
    Failure { message: String },
}

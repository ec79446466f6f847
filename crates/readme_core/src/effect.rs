use std::time::Duration;

/// Name of the file produced by the download action.
pub const README_FILENAME: &str = "README.md";

/// How long the "copied" acknowledgment stays visible after a clipboard write.
pub const COPY_CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one request to the generation service with the raw input.
    GenerateReadme { repo_url: String },
    CopyToClipboard { text: String },
    /// Post `Msg::CopyConfirmationExpired { token }` once `after` has elapsed.
    ScheduleCopyReset { token: u64, after: Duration },
    SaveDocument { filename: String, content: String },
}

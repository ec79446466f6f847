use std::time::Duration;

/// Render/spinner cadence of the UI loop.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const TAGLINE: &str =
    "Transform your GitHub repositories into professional documentation with AI-powered README generation";
pub const INPUT_TITLE: &str = " GitHub repository ";
pub const INPUT_PLACEHOLDER: &str = "https://github.com/username/repository";
pub const LABEL_GENERATE: &str = "⏎ Generate README";
pub const LABEL_GENERATING: &str = "Generating Magic...";
pub const LABEL_RESULT: &str = "Generated README";
pub const LABEL_COPY_HINT: &str = "^Y copy";
pub const LABEL_COPIED: &str = "✔ Copied!";
pub const IDLE_HINT: &str = "Create professional documentation in seconds";
pub const KEY_HINTS: &str = "Enter generate · ^Y copy · ^S download · ^U clear · ↑↓ scroll · Esc quit";

/// Lines moved by PageUp/PageDown.
pub const PAGE_SCROLL: i32 = 10;

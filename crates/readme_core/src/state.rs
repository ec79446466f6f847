use url::Url;

use crate::view_model::AppViewModel;
use crate::GenerationOutcome;

/// Presentation phase derived from the raw state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input_url: String,
    result_text: String,
    loading: bool,
    error_message: String,
    copy_confirmed: bool,
    copy_token: u64,
    saved_to: Option<String>,
    spinner_frame: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_url(&self) -> &str {
        &self.input_url
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn copy_confirmed(&self) -> bool {
        self.copy_confirmed
    }

    pub fn saved_to(&self) -> Option<&str> {
        self.saved_to.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if !self.error_message.is_empty() {
            Phase::Failure
        } else if !self.result_text.is_empty() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Submit is available only for a non-blank input with nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input_url.trim().is_empty()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase(),
            input_url: self.input_url.clone(),
            can_submit: self.can_submit(),
            loading: self.loading,
            error_message: self.error_message.clone(),
            result_text: self.result_text.clone(),
            result_chars: self.result_text.chars().count(),
            repo_slug: repo_slug(&self.input_url),
            copy_confirmed: self.copy_confirmed,
            saved_to: self.saved_to.clone(),
            spinner_frame: self.spinner_frame,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input_url != text {
            self.input_url = text;
            self.dirty = true;
        }
    }

    /// Moves into the loading phase and returns the raw URL to send, or `None`
    /// when submitting is not allowed right now.
    pub(crate) fn begin_request(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.error_message.clear();
        self.result_text.clear();
        self.saved_to = None;
        self.loading = true;
        self.spinner_frame = 0;
        self.dirty = true;
        Some(self.input_url.clone())
    }

    /// Applies a settlement. Returns `false` when no request was in flight.
    pub(crate) fn settle(&mut self, outcome: GenerationOutcome) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        match outcome {
            GenerationOutcome::Success { readme } => {
                self.error_message.clear();
                self.result_text = readme;
            }
            GenerationOutcome::Failure { message } => {
                self.result_text.clear();
                self.error_message = message;
            }
        }
        self.dirty = true;
        true
    }

    /// Shows the copy acknowledgment and returns the token of the new timer.
    pub(crate) fn confirm_copy(&mut self) -> u64 {
        self.copy_token += 1;
        self.copy_confirmed = true;
        self.dirty = true;
        self.copy_token
    }

    /// Hides the copy acknowledgment if `token` belongs to the latest copy.
    pub(crate) fn expire_copy(&mut self, token: u64) -> bool {
        if token != self.copy_token || !self.copy_confirmed {
            return false;
        }
        self.copy_confirmed = false;
        self.dirty = true;
        true
    }

    pub(crate) fn record_saved(&mut self, path: String) {
        self.saved_to = Some(path);
        self.dirty = true;
    }

    pub(crate) fn advance_spinner(&mut self) {
        if self.loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.dirty = true;
        }
    }
}

/// Extracts `owner/repo` from a repository URL such as
/// `https://github.com/acme/widgets.git`.
pub fn repo_slug(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let mut segments = parsed.path_segments()?.filter(|segment| !segment.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
        return None;
    }
    Some(format!("{owner}/{repo}"))
}

#[cfg(test)]
mod tests {
    use super::repo_slug;

    #[test]
    fn slug_from_plain_github_url() {
        assert_eq!(
            repo_slug("https://github.com/acme/widgets"),
            Some("acme/widgets".to_string())
        );
    }

    #[test]
    fn slug_strips_git_suffix_and_extra_segments() {
        assert_eq!(
            repo_slug("  https://github.com/acme/widgets.git/tree/main "),
            Some("acme/widgets".to_string())
        );
    }

    #[test]
    fn slug_requires_owner_and_repo() {
        assert_eq!(repo_slug("https://github.com/acme"), None);
        assert_eq!(repo_slug("https://github.com/acme/.git"), None);
        assert_eq!(repo_slug("not a url"), None);
    }
}

use crate::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub input_url: String,
    pub can_submit: bool,
    pub loading: bool,
    pub error_message: String,
    pub result_text: String,
    /// Character (not byte) count of `result_text`.
    pub result_chars: usize,
    pub repo_slug: Option<String>,
    pub copy_confirmed: bool,
    pub saved_to: Option<String>,
    pub spinner_frame: usize,
    pub dirty: bool,
}

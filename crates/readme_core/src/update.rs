use crate::{AppState, Effect, Msg, COPY_CONFIRMATION_DELAY, README_FILENAME};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // Editing never touches an in-flight request; the URL was captured at submit.
            state.set_input(text);
            Vec::new()
        }
        Msg::GenerateClicked => match state.begin_request() {
            Some(repo_url) => vec![Effect::GenerateReadme { repo_url }],
            None => Vec::new(),
        },
        Msg::GenerationSettled(outcome) => {
            state.settle(outcome);
            Vec::new()
        }
        Msg::CopyClicked => {
            if state.result_text().is_empty() {
                Vec::new()
            } else {
                vec![Effect::CopyToClipboard {
                    text: state.result_text().to_string(),
                }]
            }
        }
        Msg::CopySucceeded => {
            let token = state.confirm_copy();
            vec![Effect::ScheduleCopyReset {
                token,
                after: COPY_CONFIRMATION_DELAY,
            }]
        }
        // Already logged by the platform; there is no error state for copies.
        Msg::CopyFailed { .. } => Vec::new(),
        Msg::CopyConfirmationExpired { token } => {
            state.expire_copy(token);
            Vec::new()
        }
        Msg::DownloadClicked => vec![Effect::SaveDocument {
            filename: README_FILENAME.to_string(),
            content: state.result_text().to_string(),
        }],
        Msg::DocumentSaved { path } => {
            state.record_saved(path);
            Vec::new()
        }
        Msg::Tick => {
            state.advance_spinner();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

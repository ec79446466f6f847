//! README studio core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, COPY_CONFIRMATION_DELAY, README_FILENAME};
pub use msg::{GenerationOutcome, Msg};
pub use state::{repo_slug, AppState, Phase};
pub use update::update;
pub use view_model::AppViewModel;

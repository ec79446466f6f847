use readme_core::{update, AppState, GenerationOutcome, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_while_idle_changes_nothing() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn copy_failure_leaves_state_untouched() {
    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged("https://github.com/acme/widgets".to_string()),
    );
    let (state, _) = update(state, Msg::GenerateClicked);
    let (mut state, _) = update(
        state,
        Msg::GenerationSettled(GenerationOutcome::Success {
            readme: "# Widgets".to_string(),
        }),
    );
    state.consume_dirty();

    let (next, effects) = update(
        state.clone(),
        Msg::CopyFailed {
            reason: "no display".to_string(),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.copy_confirmed());
}

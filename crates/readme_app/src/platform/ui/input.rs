use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use readme_core::{AppViewModel, Msg, Phase};

use super::constants::PAGE_SCROLL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Dispatch(Msg),
    /// Scroll the result panel by this many lines.
    Scroll(i32),
    Ignore,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('y') if ctrl => result_action(view, Msg::CopyClicked),
        KeyCode::Char('s') if ctrl => result_action(view, Msg::DownloadClicked),
        KeyCode::Char('u') if ctrl => KeyAction::Dispatch(Msg::InputChanged(String::new())),
        KeyCode::Char(ch) if !ctrl => {
            let mut text = view.input_url.clone();
            text.push(ch);
            KeyAction::Dispatch(Msg::InputChanged(text))
        }
        KeyCode::Backspace => {
            let mut text = view.input_url.clone();
            if text.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Dispatch(Msg::InputChanged(text))
        }
        // The core decides whether a submit is allowed.
        KeyCode::Enter => KeyAction::Dispatch(Msg::GenerateClicked),
        KeyCode::Up => KeyAction::Scroll(-1),
        KeyCode::Down => KeyAction::Scroll(1),
        KeyCode::PageUp => KeyAction::Scroll(-PAGE_SCROLL),
        KeyCode::PageDown => KeyAction::Scroll(PAGE_SCROLL),
        _ => KeyAction::Ignore,
    }
}

/// Appends pasted text to the input, dropping line breaks.
pub fn map_paste(text: &str, view: &AppViewModel) -> KeyAction {
    let pasted: String = text.chars().filter(|ch| *ch != '\n' && *ch != '\r').collect();
    if pasted.is_empty() {
        return KeyAction::Ignore;
    }
    KeyAction::Dispatch(Msg::InputChanged(format!("{}{}", view.input_url, pasted)))
}

// Copy and download are only offered while a result is on screen.
fn result_action(view: &AppViewModel, msg: Msg) -> KeyAction {
    if view.phase == Phase::Success {
        KeyAction::Dispatch(msg)
    } else {
        KeyAction::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn view_with(input: &str, phase: Phase) -> AppViewModel {
        AppViewModel {
            input_url: input.to_string(),
            phase,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn typing_appends_to_input() {
        let view = view_with("https://github.com/acm", Phase::Idle);
        assert_eq!(
            map_key(press(KeyCode::Char('e')), &view),
            KeyAction::Dispatch(Msg::InputChanged("https://github.com/acme".to_string()))
        );
    }

    #[test]
    fn backspace_on_empty_input_is_ignored() {
        let view = view_with("", Phase::Idle);
        assert_eq!(map_key(press(KeyCode::Backspace), &view), KeyAction::Ignore);

        let view = view_with("ab", Phase::Idle);
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view),
            KeyAction::Dispatch(Msg::InputChanged("a".to_string()))
        );
    }

    #[test]
    fn enter_always_reaches_core() {
        let view = view_with("", Phase::Idle);
        assert_eq!(
            map_key(press(KeyCode::Enter), &view),
            KeyAction::Dispatch(Msg::GenerateClicked)
        );
    }

    #[test]
    fn copy_and_download_need_a_result() {
        let idle = view_with("x", Phase::Idle);
        assert_eq!(map_key(ctrl('y'), &idle), KeyAction::Ignore);
        assert_eq!(map_key(ctrl('s'), &idle), KeyAction::Ignore);

        let done = view_with("x", Phase::Success);
        assert_eq!(
            map_key(ctrl('y'), &done),
            KeyAction::Dispatch(Msg::CopyClicked)
        );
        assert_eq!(
            map_key(ctrl('s'), &done),
            KeyAction::Dispatch(Msg::DownloadClicked)
        );
    }

    #[test]
    fn quit_keys() {
        let view = AppViewModel::default();
        assert_eq!(map_key(press(KeyCode::Esc), &view), KeyAction::Quit);
        assert_eq!(map_key(ctrl('c'), &view), KeyAction::Quit);
    }

    #[test]
    fn releases_are_ignored() {
        let view = AppViewModel::default();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, &view), KeyAction::Ignore);
    }

    #[test]
    fn paste_strips_line_breaks() {
        let view = view_with("", Phase::Idle);
        assert_eq!(
            map_paste("https://github.com/acme/widgets\r\n", &view),
            KeyAction::Dispatch(Msg::InputChanged(
                "https://github.com/acme/widgets".to_string()
            ))
        );
        assert_eq!(map_paste("\n", &view), KeyAction::Ignore);
    }
}

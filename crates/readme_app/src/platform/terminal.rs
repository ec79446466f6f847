use std::io::{self, Write};
use std::panic::{self, PanicHookInfo};
use std::thread::{self, ThreadId};

use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use readme_logging::readme_error;

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Turns bracketed paste on or off, so a paste arrives as one `Event::Paste`
/// instead of a burst of key presses.
pub fn set_bracketed_paste<W: Write>(out: &mut W, enabled: bool) -> io::Result<()> {
    if enabled {
        execute!(out, EnableBracketedPaste)
    } else {
        execute!(out, DisableBracketedPaste)
    }
}

/// Restricts terminal restoration on panic to the UI thread.
///
/// Must run after `ratatui::try_init`, whose hook it wraps. Panics on engine
/// or timer threads are logged; the engine still settles the request.
pub fn install_panic_hook() {
    let restore = panic::take_hook();
    let hook = ui_thread_hook(
        thread::current().id(),
        Box::new(move |info| {
            let _ = set_bracketed_paste(&mut io::stdout(), false);
            restore(info);
        }),
    );
    panic::set_hook(hook);
}

fn ui_thread_hook(ui_thread: ThreadId, on_ui: PanicHook) -> PanicHook {
    Box::new(move |info| {
        if thread::current().id() == ui_thread {
            on_ui(info);
        } else {
            readme_error!(
                "Background thread {} panicked: {}",
                thread::current().name().unwrap_or("<unnamed>"),
                info
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn bracketed_paste_escape_sequences() {
        let mut out = Vec::new();
        set_bracketed_paste(&mut out, true).unwrap();
        assert_eq!(out, b"\x1b[?2004h");

        out.clear();
        set_bracketed_paste(&mut out, false).unwrap();
        assert_eq!(out, b"\x1b[?2004l");
    }

    #[test]
    fn only_ui_thread_panics_reach_restore() {
        readme_logging::initialize_for_tests();
        let restored = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&restored);
        panic::set_hook(ui_thread_hook(
            thread::current().id(),
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        ));

        let worker = thread::Builder::new()
            .name("engine-test".to_string())
            .spawn(|| panic!("request task blew up"))
            .unwrap();
        assert!(worker.join().is_err());
        assert_eq!(restored.load(Ordering::SeqCst), 0);

        assert!(panic::catch_unwind(|| panic!("ui blew up")).is_err());
        assert_eq!(restored.load(Ordering::SeqCst), 1);

        let _ = panic::take_hook();
    }
}

use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use readme_core::{AppViewModel, Phase};

use super::constants::*;
use super::layout::AppLayout;

pub fn render(frame: &mut Frame, view: &AppViewModel, scroll: u16) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header);
    render_input(frame, layout.input, view);
    render_action(frame, layout.action, view);
    match view.phase {
        Phase::Failure => render_error(frame, layout.body, view),
        Phase::Success => {
            let scroll = scroll.min(max_result_scroll(view, frame.area()));
            render_result(frame, layout.body, view, scroll);
        }
        Phase::Idle | Phase::Loading => render_hint(frame, layout.body),
    }
    render_footer(frame, layout.footer, view);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("README", Style::new().bold().fg(Color::White)),
            Span::styled(" Generator", Style::new().bold().fg(Color::Magenta)),
        ]),
        Line::from(TAGLINE).fg(Color::Gray),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::bordered()
        .title(INPUT_TITLE)
        .border_style(Style::new().fg(Color::Magenta));
    let inner_width = usize::from(area.width.saturating_sub(2));

    let (text, cursor_col) = if view.input_url.is_empty() {
        (Line::from(INPUT_PLACEHOLDER).fg(Color::DarkGray), 0)
    } else {
        let visible = visible_tail(&view.input_url, inner_width.saturating_sub(1));
        let col = visible.chars().count();
        (Line::from(visible), col)
    };

    frame.render_widget(Paragraph::new(text).block(block), area);

    let cursor_col = u16::try_from(cursor_col).unwrap_or(u16::MAX);
    frame.set_cursor_position(Position::new(
        area.x.saturating_add(1).saturating_add(cursor_col),
        area.y.saturating_add(1),
    ));
}

fn render_action(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let line = if view.loading {
        let frame_idx = view.spinner_frame % SPINNER_FRAMES.len();
        Line::from(format!("{} {}", SPINNER_FRAMES[frame_idx], LABEL_GENERATING))
            .fg(Color::Yellow)
    } else if view.can_submit {
        Line::from(LABEL_GENERATE).fg(Color::Magenta).bold()
    } else {
        Line::from(LABEL_GENERATE).fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_error(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::bordered()
        .title(" Error ")
        .border_style(Style::new().fg(Color::Red));
    let paragraph = Paragraph::new(view.error_message.as_str())
        .style(Style::new().fg(Color::LightRed))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame, area: Rect, view: &AppViewModel, scroll: u16) {
    let title = match &view.repo_slug {
        Some(slug) => format!(" {LABEL_RESULT} · {slug} "),
        None => format!(" {LABEL_RESULT} "),
    };
    let copy = if view.copy_confirmed {
        Span::styled(LABEL_COPIED, Style::new().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled(LABEL_COPY_HINT, Style::new().fg(Color::Magenta))
    };
    let status = Line::from(vec![
        Span::raw(format!(" {} characters · ", view.result_chars)),
        copy,
        Span::raw(" "),
    ])
    .right_aligned();

    let block = Block::bordered()
        .title(Line::from(title).fg(Color::Green))
        .title(status)
        .border_style(Style::new().fg(Color::Green));
    let paragraph = result_body(view).scroll((scroll, 0)).block(block);
    frame.render_widget(paragraph, area);
}

fn result_body(view: &AppViewModel) -> Paragraph<'_> {
    Paragraph::new(view.result_text.as_str()).wrap(Wrap { trim: false })
}

/// Largest useful scroll offset of the result panel on a `screen`-sized frame.
///
/// Counted in wrapped rows, so the last page of a README with long lines is
/// still reachable.
pub fn max_result_scroll(view: &AppViewModel, screen: Rect) -> u16 {
    let inner = Block::bordered().inner(AppLayout::new(screen).body);
    let rows = result_body(view).line_count(inner.width);
    u16::try_from(rows.saturating_sub(usize::from(inner.height))).unwrap_or(u16::MAX)
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(IDLE_HINT).fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::new());
    frame.render_widget(hint, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut spans = Vec::new();
    if let Some(path) = &view.saved_to {
        spans.push(Span::styled(
            format!("Saved to {path}"),
            Style::new().fg(Color::Green),
        ));
        spans.push(Span::raw(" · "));
    }
    spans.push(Span::styled(KEY_HINTS, Style::new().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Last `max_chars` characters of `text`, so the cursor end stays visible.
fn visible_tail(text: &str, max_chars: usize) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    let skip = count - max_chars;
    match text.char_indices().nth(skip) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            Self::summary(app)
        };

        let help_hint = if app.is_dragging() {
            " esc:cancel release:drop "
        } else {
            " q:quit j/k:select J/K:move d:remove drag:reorder "
        };

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn summary(app: &App) -> String {
        let count = app.items.len();
        match app.session() {
            Some(session) => {
                let velocity = app.drag.velocity();
                let scrolling = if velocity != 0.0 {
                    format!(" | scroll {:+}", velocity)
                } else {
                    String::new()
                };
                format!(
                    " DRAG | {} -> {} of {}{}",
                    session.from + 1,
                    session.target + 1,
                    count,
                    scrolling
                )
            }
            None if count == 0 => " NORMAL | empty".to_string(),
            None => format!(" NORMAL | {} of {}", app.selected + 1, count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use movable_core::{AppConfig, PointerSample};

    #[test]
    fn test_summary() {
        let mut app = App::demo(AppConfig::default(), Theme::default(), 3);
        app.set_list_area(0, 10);
        assert_eq!(StatusBarWidget::summary(&app), " NORMAL | 1 of 3");

        app.press(PointerSample::mouse(0.0, 1.0));
        assert_eq!(StatusBarWidget::summary(&app), " DRAG | 2 -> 2 of 3");
    }
}

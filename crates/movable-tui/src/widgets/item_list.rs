use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::{App, Item};

pub struct ItemListWidget;

impl ItemListWidget {
    /// Draw the list, shifted rows included, with the dragged item floating
    /// under the pointer
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let dragging = app.is_dragging();
        let border_color = if dragging {
            app.theme.accent
        } else {
            app.theme.grey0
        };

        let block = Block::default()
            .title(format!(" Items ({}) ", app.items.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Geometry follows whatever area we were given this frame
        app.set_list_area(inner.y, inner.height);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let layout = app.layout();
        let session = app.session();
        let theme = &app.theme;
        let buf = frame.buffer_mut();

        // Landing gap, painted first so shifting rows slide over it
        if let Some((top, height)) = session.as_ref().and_then(|s| layout.drop_gap(s)) {
            let top = layout.to_screen(top).round() as i32;
            let style = Style::default().fg(theme.drop_slot).bg(theme.bg0);
            for r in 0..height.round() as i32 {
                let y = top + r;
                if y >= inner.y as i32 && y < inner.bottom() as i32 {
                    buf.set_stringn(inner.x, y as u16, "|", inner.width as usize, style);
                }
            }
        }

        for (i, item) in app.items.iter().enumerate() {
            if session.is_some_and(|s| s.from == i) {
                continue;
            }
            let Some(&base) = layout.boundaries.get(i) else {
                continue;
            };

            let top = layout.to_screen(base + item.offset.current()).round() as i32;
            let style = if !dragging && i == app.selected {
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.grey2).bg(theme.item_band(i))
            };
            let marker = if !dragging && i == app.selected { ">" } else { " " };
            Self::draw_item(buf, inner, top, item, style, marker);
        }

        // Floating item, kept inside the list area
        if let (Some(session), Some(ghost_top)) = (session, app.drag.ghost_top()) {
            if let Some(item) = app.items.get(session.from) {
                let lowest = inner.bottom() as i32 - 1;
                let top = (ghost_top.round() as i32).clamp(inner.y as i32, lowest);
                let style = Style::default()
                    .fg(theme.yellow)
                    .bg(theme.ghost)
                    .add_modifier(Modifier::BOLD);
                Self::draw_item(buf, inner, top, item, style, "=");
            }
        }
    }

    /// Paint one item starting at screen row `top`, clipped to `area`
    fn draw_item(buf: &mut Buffer, area: Rect, top: i32, item: &Item, style: Style, marker: &str) {
        for r in 0..item.rows as i32 {
            let y = top + r;
            if y < area.y as i32 || y >= area.bottom() as i32 {
                continue;
            }
            let y = y as u16;

            buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            let text = if r == 0 {
                format!("{} {}", marker, item.label)
            } else {
                "  ·".to_string()
            };
            buf.set_stringn(area.x, y, text, area.width as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use movable_core::{AppConfig, DragConfig, PointerSample};
    use ratatui::{backend::TestBackend, Terminal};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_items_inside_border() {
        let mut app = App::demo(AppConfig::default(), Theme::default(), 3);
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();

        terminal
            .draw(|frame| ItemListWidget::render(frame, frame.area(), &mut app))
            .unwrap();

        assert_eq!((app.list_top, app.list_height), (1, 6));
        let buf = terminal.backend().buffer();
        assert!(row_text(buf, 1).contains("> Item 1"));
        assert!(row_text(buf, 2).contains("Item 2"));
        assert!(row_text(buf, 4).contains("Item 3"));
    }

    #[test]
    fn test_dragged_item_floats() {
        let mut app = App::demo(AppConfig::default(), Theme::default(), 3);
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal
            .draw(|frame| ItemListWidget::render(frame, frame.area(), &mut app))
            .unwrap();

        app.press(PointerSample::mouse(3.0, 1.0));
        app.pointer_moved(PointerSample::mouse(3.0, 6.0));
        app.on_frame(std::time::Instant::now());

        terminal
            .draw(|frame| ItemListWidget::render(frame, frame.area(), &mut app))
            .unwrap();
        let buf = terminal.backend().buffer();
        assert!(row_text(buf, 6).contains("= Item 1"));
    }

    #[test]
    fn test_drop_gap_marked() {
        let config = AppConfig {
            drag: DragConfig {
                transition_ms: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::demo(config, Theme::default(), 3);
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal
            .draw(|frame| ItemListWidget::render(frame, frame.area(), &mut app))
            .unwrap();

        // Grab the two-row Item 2 by its second row and drag it past Item 3
        app.press(PointerSample::mouse(3.0, 3.0));
        app.pointer_moved(PointerSample::mouse(3.0, 5.0));
        app.on_frame(std::time::Instant::now());
        assert_eq!(app.session().map(|s| s.target), Some(2));

        terminal
            .draw(|frame| ItemListWidget::render(frame, frame.area(), &mut app))
            .unwrap();
        let buf = terminal.backend().buffer();

        // Item 3 slid up, the ghost covers rows 4-5, the gap's last row shows
        assert!(row_text(buf, 2).contains("Item 3"));
        assert!(row_text(buf, 4).contains("= Item 2"));
        assert_eq!(buf[(1, 6)].symbol(), "|");
        assert_eq!(buf[(1, 6)].fg, app.theme.drop_slot);
    }
}

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use movable_core::AppConfig;
use movable_tui::{
    drag::DragConfigExt,
    event::{AppEvent, EventHandler},
    input::{dispatch, handle_key_event, handle_mouse_event, Action},
    widgets::{ItemListWidget, StatusBarWidget},
    App, Theme,
};

pub fn run(config: AppConfig, items: usize) -> Result<()> {
    info!(items, log = %config.log_path().display(), "starting demo");

    let events = EventHandler::new(config.ui.tick_rate_ms)
        .with_frame_rate(config.drag.frame_duration());
    let mut app = App::demo(config, Theme::default(), items);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("movable"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(items = app.items.len(), "demo finished");
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, events: &EventHandler) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, app))?;

        // Frame rate while dragging or settling, tick rate otherwise
        let interval = events.interval(app.needs_frame());
        let timeout = interval.saturating_sub(last_frame.elapsed());

        for event in events.drain(timeout)? {
            let action = match event {
                AppEvent::Key(key) => handle_key_event(key, app),
                AppEvent::Mouse(mouse) => handle_mouse_event(mouse),
                AppEvent::Resize(_, _) => Action::None,
            };
            dispatch(app, action);
        }

        let now = Instant::now();
        if now.duration_since(last_frame) >= events.interval(app.needs_frame()) {
            app.on_frame(now);
            last_frame = now;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if !app.config.ui.show_status_bar {
        ItemListWidget::render(frame, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    ItemListWidget::render(frame, chunks[0], app);
    StatusBarWidget::render(frame, chunks[1], app);
}

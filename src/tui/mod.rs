pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::app::{AppContext, Result};
use crate::fetcher::LoadTicket;
use crate::presenter::facts::random_fact;
use crate::presenter::{Activation, ModalInput};
use crate::view::ViewItem;

use self::app::{hit, Focus, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;
type LoadResult = (LoadTicket, Result<Vec<ViewItem>>);

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new(ctx.default_range(), AppContext::today(), random_fact());
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<LoadResult>();

    loop {
        while let Ok((ticket, result)) = rx.try_recv() {
            tui_app.finish_load(ticket, result, &ctx.loads);
        }

        terminal.draw(|frame| layout::render(frame, &mut tui_app, &ctx.config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => handle_key(&mut tui_app, &ctx, &tx, key),
            AppEvent::Mouse(mouse) => handle_mouse(&mut tui_app, &ctx, &tx, mouse),
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run the pipeline in the background; the gallery shows the loading state
/// until the result comes back over `tx`.
fn start_load(tui_app: &mut TuiApp, ctx: &Arc<AppContext>, tx: &UnboundedSender<LoadResult>) {
    let range = match tui_app.requested_range() {
        Ok(range) => range,
        Err(e) => {
            tui_app.set_status(e.to_string());
            return;
        }
    };

    let ticket = ctx.loads.begin();
    tui_app.begin_load(ticket);
    tracing::info!(
        "Loading {} to {} ({:?})",
        range.start(),
        range.end(),
        ticket
    );

    let ctx = ctx.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = ctx.load_view(&range).await;
        let _ = tx.send((ticket, result));
    });
}

fn open_link(tui_app: &mut TuiApp, url: Option<String>, what: &str) {
    match url {
        Some(url) => {
            if let Err(e) = open::that(&url) {
                tui_app.set_status(format!("Failed to open browser: {}", e));
            }
        }
        None => tui_app.set_status(format!("No {} for this entry", what)),
    }
}

fn handle_key(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &UnboundedSender<LoadResult>,
    key: KeyEvent,
) {
    let action = ctx.config.keybindings.get_action(&key);
    tui_app.clear_status();

    if tui_app.modal.is_open() {
        handle_modal_key(tui_app, action);
        return;
    }

    match action {
        Action::Quit => tui_app.should_quit = true,
        Action::NextFocus => tui_app.focus = tui_app.focus.next(),
        Action::PrevFocus => tui_app.focus = tui_app.focus.prev(),
        Action::Load => start_load(tui_app, ctx, tx),
        Action::NextFact => tui_app.fact = random_fact(),
        Action::MoveLeft | Action::MoveRight | Action::MoveUp | Action::MoveDown => {
            let (dx, dy) = match action {
                Action::MoveLeft => (-1, 0),
                Action::MoveRight => (1, 0),
                Action::MoveUp => (0, -1),
                _ => (0, 1),
            };
            match tui_app.focus {
                // Left/Right step a day, Up/Down a week
                Focus::StartDate | Focus::EndDate => tui_app.shift_date(dx + dy * -7),
                Focus::Gallery => tui_app.move_selection(dx as isize, dy as isize),
                Focus::LoadButton => {}
            }
        }
        Action::Activate => match tui_app.focus {
            Focus::Gallery => {
                let activation = if key.code == KeyCode::Char(' ') {
                    Activation::Space
                } else {
                    Activation::Enter
                };
                tui_app.activate_card(tui_app.selected, activation);
            }
            Focus::StartDate | Focus::EndDate | Focus::LoadButton => start_load(tui_app, ctx, tx),
        },
        Action::Close
        | Action::OpenHd
        | Action::OpenSource
        | Action::PlayVideo
        | Action::None => {}
    }
}

fn handle_modal_key(tui_app: &mut TuiApp, action: Action) {
    let detail = tui_app.modal.detail().cloned();
    match action {
        Action::Quit => tui_app.should_quit = true,
        Action::Close => {
            tui_app.modal.handle(ModalInput::Escape);
        }
        Action::MoveUp => tui_app.detail_scroll = tui_app.detail_scroll.saturating_sub(1),
        Action::MoveDown => tui_app.detail_scroll = tui_app.detail_scroll.saturating_add(1),
        Action::OpenHd => open_link(tui_app, detail.and_then(|d| d.hd_link), "HD image"),
        Action::OpenSource => open_link(tui_app, detail.and_then(|d| d.source_link), "source link"),
        Action::PlayVideo => open_link(
            tui_app,
            detail.and_then(|d| d.play_target().map(String::from)),
            "video",
        ),
        _ => {}
    }
}

fn handle_mouse(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &UnboundedSender<LoadResult>,
    mouse: MouseEvent,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (column, row) = (mouse.column, mouse.row);

    if tui_app.modal.is_open() {
        let areas = &tui_app.areas;
        let input = if areas.close_control.is_some_and(|a| hit(a, column, row)) {
            ModalInput::CloseControl
        } else if areas.modal.is_some_and(|a| hit(a, column, row)) {
            ModalInput::Content
        } else {
            ModalInput::Backdrop
        };
        tui_app.modal.handle(input);
        return;
    }

    if let Some(card) = tui_app.card_at(column, row) {
        tui_app.focus = Focus::Gallery;
        tui_app.activate_card(card, Activation::Click);
    } else if hit(tui_app.areas.load_button, column, row) {
        tui_app.focus = Focus::LoadButton;
        start_load(tui_app, ctx, tx);
    } else if hit(tui_app.areas.start_field, column, row) {
        tui_app.focus = Focus::StartDate;
    } else if hit(tui_app.areas.end_field, column, row) {
        tui_app.focus = Focus::EndDate;
    }
}

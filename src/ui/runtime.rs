use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the list UI until the user quits, then flush pending saves.
///
/// The first frame shows the loading indicator; key presses made while the
/// saved list is read are handled once it has been applied.
pub async fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(tick_rate);

    terminal.draw(|frame| draw(frame, &app))?;
    app.load().await;

    let mut redraw = true;
    loop {
        if redraw || app.take_changed() {
            terminal.draw(|frame| draw(frame, &app))?;
            redraw = false;
        }
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => {
                // List changes arrive through the subscription
                let before = app.view_position();
                handle_key(&mut app, key);
                redraw = app.view_position() != before;
            }
            Some(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
                redraw = true;
            }
            Some(AppEvent::Tick) => {}
            None => break,
        }
    }

    app.shutdown().await;
    drop(guard);
    Ok(())
}

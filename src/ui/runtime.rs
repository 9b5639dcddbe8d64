use crate::config::Config;
use crate::fetch::{FetchManager, HttpClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::Arc;

/// Run the trip list until the user quits.
pub async fn run(config: &Config, client: Arc<dyn HttpClient>) -> anyhow::Result<()> {
    let options = config.api.request_options()?;
    let (mut terminal, guard) = setup_terminal()?;

    let (trips, mut completions) = FetchManager::new(client, options);
    let mut app = App::new(config.api.base_url.clone(), config.ui.default_region, trips);
    app.mount();
    let mut events = EventHandler::new(config.ui.tick_rate());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Tick) => app.on_tick(),
                // Redrawn at the top of the loop
                Some(AppEvent::Resize(_, _)) => {}
                None => break,
            },
            Some(settled) = completions.recv() => app.on_fetch_settled(settled),
            _ = tokio::signal::ctrl_c() => app.request_quit(),
        }
    }

    app.request_quit();
    drop(guard);
    tracing::info!("Trip list closed");
    Ok(())
}

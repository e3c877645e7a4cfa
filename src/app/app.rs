use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::prelude::*;

use bb_base::ItemStore;
use bb_base::config::constants::{EVENT_POLL_MS, RENDER_THROTTLE_MS};

use crate::app::events::handle_event;
use crate::app::now_ms;
use crate::state::{State, StateContainer};
use crate::ui::{self, Environment, split::SplitLayout};

pub struct App {
    container: StateContainer,
    /// Process-wide store, lent to every render through the Environment
    store: ItemStore,
    /// Split strategy chosen at startup
    layout: Box<dyn SplitLayout>,
    /// Set by the state subscriber; cleared after each frame
    dirty: Rc<Cell<bool>>,
    /// Last render time for animation throttling
    last_render_ms: u64,
}

impl App {
    pub fn new(state: State, store: ItemStore, layout: Box<dyn SplitLayout>) -> Self {
        let mut container = StateContainer::new(state);

        let dirty = Rc::new(Cell::new(true));
        let flag = dirty.clone();
        container.subscribe(Box::new(move |_| flag.set(true)));
        container.subscribe(Box::new(|state| {
            tracing::debug!(
                selected_page = ?state.selected_page,
                is_detail_visible = state.is_detail_visible,
                focus = ?state.focus,
                "state changed"
            );
        }));

        Self { container, store, layout, dirty, last_render_ms: 0 }
    }

    pub fn state(&self) -> &State {
        self.container.state()
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        tracing::info!(form_factor = %self.layout.form_factor(), "event loop started");

        loop {
            let current_ms = now_ms();

            if self.needs_frame(current_ms) {
                let env = Environment { store: &self.store, layout: self.layout.as_ref(), now_ms: current_ms };
                let state = self.state();
                terminal.draw(|frame| ui::render(frame, state, &env))?;
                self.dirty.set(false);
                self.last_render_ms = current_ms;
            }

            if !event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                continue;
            }
            let evt = event::read()?;
            if !self.handle(&evt, now_ms()) {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }

    /// Route one terminal event through the state container. Returns false on quit.
    pub fn handle(&mut self, evt: &Event, now_ms: u64) -> bool {
        match handle_event(evt, self.container.state()) {
            Some(action) => {
                self.container.dispatch(action, now_ms);
                true
            }
            None => false,
        }
    }

    /// Draw when state changed, or while the detail transition still has
    /// frames left (throttled).
    fn needs_frame(&self, now_ms: u64) -> bool {
        if self.dirty.get() {
            return true;
        }
        let animating = self.container.state().detail_transition.is_some_and(|t| t.end_ms() > self.last_render_ms);
        animating && now_ms.saturating_sub(self.last_render_ms) >= RENDER_THROTTLE_MS
    }
}

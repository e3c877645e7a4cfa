use crate::app::actions::{Action, ActionResult, apply_action};

use super::runtime::State;

/// Called with the new state after every mutating dispatch
pub type Subscriber = Box<dyn FnMut(&State)>;

/// Owns the UI state; all mutation goes through `dispatch`.
pub struct StateContainer {
    state: State,
    subscribers: Vec<Subscriber>,
}

impl StateContainer {
    pub fn new(state: State) -> Self {
        Self { state, subscribers: Vec::new() }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Apply an action. Subscribers are notified only when it changed something.
    pub fn dispatch(&mut self, action: Action, now_ms: u64) -> ActionResult {
        let result = apply_action(action, &mut self.state, now_ms);
        if result == ActionResult::Redraw {
            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(container: &mut StateContainer) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        container.subscribe(Box::new(move |_| seen.set(seen.get() + 1)));
        count
    }

    #[test]
    fn subscribers_see_mutations() {
        let mut container = StateContainer::new(State::default());
        let count = counting(&mut container);
        let last_page = Rc::new(Cell::new(None));
        let sink = last_page.clone();
        container.subscribe(Box::new(move |s| sink.set(s.selected_page)));

        assert_eq!(container.dispatch(Action::SelectPage(Some(3)), 0), ActionResult::Redraw);
        assert_eq!(count.get(), 1);
        assert_eq!(last_page.get(), Some(3));
        assert_eq!(container.state().selected_page, Some(3));
    }

    #[test]
    fn regenerate_notifies_nobody() {
        let mut container = StateContainer::new(State::default());
        let count = counting(&mut container);
        let before = container.state().clone();

        assert_eq!(container.dispatch(Action::Regenerate, 0), ActionResult::Nop);
        assert_eq!(count.get(), 0);
        assert_eq!(container.state(), &before);
    }
}

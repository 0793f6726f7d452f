use crate::controllers::interactive::events::InputEvent;

pub trait EventSource {
    /// Returns the next pending event without blocking. `None` just means nothing happened yet.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Called when a poll came back empty. Sources that can sleep until input arrives
    /// should do so here instead of letting the caller spin.
    fn wait_for_events(&mut self) {}
}

use crate::todo::notification::Generation;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Terminal input stream ended or failed
    InputClosed,

    /// Auto-clear timer fired for the given notification
    NotificationExpired { generation: Generation },
}

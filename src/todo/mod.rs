//! To-do domain: the item list, the notification emitter, and the timer that
//! auto-clears notifications.

pub mod list;
pub mod notification;
pub mod timer;

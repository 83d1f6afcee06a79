//! Transient notification messages
//!
//! Save/load results, archive feedback, and session warnings all surface
//! through one overlay; any component can post to it.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};

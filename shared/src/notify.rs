//! # Notification Sink
//!
//! Every commerce, subscription and comment action produces one user-facing
//! message. The session never talks to a UI primitive directly; it hands a
//! [`Notice`] to whatever [`NotificationSink`] the caller injects. The browser
//! build passes a sink backed by `window.alert`, tests pass a [`NoticeLog`].

use std::cell::RefCell;
use std::fmt;

/// Target for user-facing confirmation and failure messages.
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

impl<F> NotificationSink for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// A message the interaction model wants shown to the user.
///
/// The rendered text is fully determined by the triggering input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AddedToCart { name: &'static str, price: u32 },
    Redeemed { name: &'static str, points: u32 },
    InsufficientPoints,
    Subscribed { email: String },
    CommentReceived { comment: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AddedToCart { name, price } => {
                write!(f, "You've added {} to your cart for ${}", name, price)
            }
            Notice::Redeemed { name, points } => {
                write!(f, "You've purchased {} with {} points!", name, points)
            }
            Notice::InsufficientPoints => {
                write!(f, "You don't have enough points for this item.")
            }
            Notice::Subscribed { email } => {
                write!(f, "Thank you for subscribing with email: {}", email)
            }
            Notice::CommentReceived { comment } => {
                write!(f, "Thank you for your comment: {}", comment)
            }
        }
    }
}

impl Notice {
    /// Render and deliver this notice.
    pub fn send(&self, sink: &dyn NotificationSink) {
        sink.notify(&self.to_string());
    }
}

/// Sink that records messages in order instead of showing them.
///
/// Used by tests, and by the web layer to defer blocking popups until the
/// session signal has been released.
#[derive(Debug, Default)]
pub struct NoticeLog {
    messages: RefCell<Vec<String>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    /// Forward every recorded message to `sink`, oldest first, and clear the log.
    pub fn drain_into(&self, sink: &dyn NotificationSink) {
        let pending = std::mem::take(&mut *self.messages.borrow_mut());
        for message in pending {
            sink.notify(&message);
        }
    }
}

impl NotificationSink for NoticeLog {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

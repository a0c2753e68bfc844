//! # Events Module
//!
//! The logging interface handed to every core component.
//!
//! ## Design
//! Components never write log output themselves. They send typed events
//! through an [`EventSender`]; the CLI renders them as log lines, and tests
//! collect them from the matching [`EventReceiver`].
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! router.run(&sender)?;
//! drop(sender);
//!
//! for event in receiver.iter() {
//!     if let Event::Sort(SortEvent::Moved { from, to }) = event {
//!         println!("{} -> {}", from.display(), to.display());
//!     }
//! }
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;

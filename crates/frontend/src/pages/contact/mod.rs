//! Contact page
//!
//! - flow.rs: submission state machine (pure, no signals)
//! - model.rs: API call to the backend
//! - view_model.rs: signals, commands, async glue
//! - view.rs: Leptos components

pub mod flow;
mod model;
mod view;
mod view_model;

pub use flow::{ContactFlow, Notice, NoticeKind, SubmissionStatus, SubmitError, Ticket};
pub use view::ContactPage;
pub use view_model::ContactViewModel;

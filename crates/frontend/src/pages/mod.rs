//! Site pages.
//!
//! Content pages follow the same split:
//! - model.rs: pure `build(&ContentStore) -> PageModel` with every derived value
//! - view.rs: Leptos component rendering the model
//!
//! The contact page adds a submission flow, see [`contact`].

pub mod about;
pub mod blog;
pub mod case_studies;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;
pub mod solutions;

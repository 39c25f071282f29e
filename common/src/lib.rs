//! Shared model and browser-independent logic for the site induction page.
//!
//! The `frontend` crate renders these types and the `backend` crate serves
//! [`model::config::ClientConfig`]; everything here compiles on the host so
//! it can be unit tested without a browser.

pub mod dates;
pub mod model;
pub mod requests;
pub mod signature;
pub mod vcard;
pub mod viewer;

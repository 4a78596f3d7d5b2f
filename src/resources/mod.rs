//! Resource groups of the Unosend API.
//!
//! Each facade borrows the [`Client`](crate::Client) it was obtained from and
//! maps every method onto exactly one HTTP request.

mod audiences;
mod contacts;
mod domains;
mod emails;

pub use audiences::Audiences;
pub use contacts::{Contacts, CreateContact, UpdateContact};
pub use domains::Domains;
pub use emails::{Attachment, Emails, ListOptions, Recipients, SendEmail, Tag};

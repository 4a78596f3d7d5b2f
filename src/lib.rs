//! # Unosend Client
//! Asynchronous wrapper around the Unosend email HTTP API, providing typed methods to send email, manage sending domains, and maintain audiences and their contacts from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust services that send transactional or marketing mail through Unosend: configure a [`Client`] with an API key, send with [`SendEmail`], register and verify a [`Domain`], and keep [`Audience`]s of [`Contact`]s up to date.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, with one connection pool per [`Client`] shared by its clones.
//!
//! ## Out of scope
//! No retries, rate-limit handling, automatic pagination, batch sending or webhook verification. Every method is exactly one HTTP request; backoff is left to the caller.
//!
//! ## Errors
//! Every operation returns the crate-wide [`Result`]. A request that never reached the server becomes [`Error::Request`] and reports [`Error::code`] `0`; a non-2xx answer becomes [`Error::Api`] carrying the server's message, code and HTTP status. Constructing a client with an empty key fails immediately with [`Error::MissingApiKey`].
//!
//! ## Logging
//! Requests, response statuses and failures are emitted through `tracing` at `debug`/`warn` level. Install any subscriber to see them; the API key is never logged.
//!
//! ## Example
//! ```no_run
//! use unosend::{Client, CreateContact, SendEmail};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unosend::Error> {
//!     let client = Client::new("un_live_xxx")?;
//!
//!     let email = SendEmail::new("hello@acme.com", "user@example.com", "Welcome")
//!         .html("<p>Thanks for signing up!</p>");
//!     let sent = client.emails().send(&email).await?;
//!     println!("Queued: {} ({})", sent.id, sent.status);
//!
//!     let audience = client.audiences().create("Newsletter").await?;
//!     client
//!         .contacts()
//!         .create(&CreateContact::new(&audience.id, "user@example.com").first_name("Ada"))
//!         .await?;
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;
mod resources;

pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorCode};
pub use models::{Audience, Contact, DnsRecord, Domain, Email};
pub use reqwest::Method;
pub use resources::{
    Attachment, Audiences, Contacts, CreateContact, Domains, Emails, ListOptions, Recipients,
    SendEmail, Tag, UpdateContact,
};

/// Result type alias for Unosend operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

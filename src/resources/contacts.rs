use crate::models::{Contact, list_from_json};
use crate::{Client, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// A contact to add to an audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    audience_id: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
}

impl CreateContact {
    pub fn new(audience_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            audience_id: audience_id.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

/// Partial update of a contact. Only the fields that were set are sent.
///
/// # Examples
/// ```
/// use unosend::UpdateContact;
///
/// let update = UpdateContact::new().unsubscribed(true);
/// assert_eq!(
///     serde_json::to_string(&update).unwrap(),
///     r#"{"unsubscribed":true}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unsubscribed: Option<bool>,
}

impl UpdateContact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn unsubscribed(mut self, unsubscribed: bool) -> Self {
        self.unsubscribed = Some(unsubscribed);
        self
    }
}

/// Contact operations, obtained from [`Client::contacts`].
#[derive(Debug, Clone, Copy)]
pub struct Contacts<'c> {
    client: &'c Client,
}

impl<'c> Contacts<'c> {
    pub(crate) const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Add a contact to the audience named in `contact`.
    pub async fn create(&self, contact: &CreateContact) -> Result<Contact> {
        let data = self
            .client
            .request(Method::POST, "/contacts", Some(contact))
            .await?;
        Ok(Contact::from_json(&data))
    }

    /// Fetch a single contact by id.
    pub async fn get(&self, id: &str) -> Result<Contact> {
        let data = self
            .client
            .request::<()>(Method::GET, &format!("/contacts/{id}"), None)
            .await?;
        Ok(Contact::from_json(&data))
    }

    /// List every contact of one audience.
    pub async fn list(&self, audience_id: &str) -> Result<Vec<Contact>> {
        let query = [("audienceId", audience_id)];
        let data = self
            .client
            .request_with_query::<(), _>(Method::GET, "/contacts", Some(&query), None)
            .await?;
        Ok(list_from_json(&data, Contact::from_json))
    }

    /// Apply a partial update; fields not set on `update` are left unchanged.
    ///
    /// # Examples
    /// ```no_run
    /// # use unosend::{Client, UpdateContact};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unosend::Error> {
    /// let client = Client::new("un_live_xxx")?;
    /// let contact = client
    ///     .contacts()
    ///     .update("con_123", &UpdateContact::new().unsubscribed(true))
    ///     .await?;
    /// assert!(contact.unsubscribed);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update(&self, id: &str, update: &UpdateContact) -> Result<Contact> {
        let data = self
            .client
            .request(Method::PATCH, &format!("/contacts/{id}"), Some(update))
            .await?;
        Ok(Contact::from_json(&data))
    }

    /// Remove a contact. Returns the server's acknowledgement as-is.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.client
            .request::<()>(Method::DELETE, &format!("/contacts/{id}"), None)
            .await
    }
}

use crate::models::{Audience, list_from_json};
use crate::{Client, Result};
use reqwest::Method;
use serde_json::{Value, json};

/// Audience operations, obtained from [`Client::audiences`].
#[derive(Debug, Clone, Copy)]
pub struct Audiences<'c> {
    client: &'c Client,
}

impl<'c> Audiences<'c> {
    pub(crate) const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Create an empty audience.
    ///
    /// # Examples
    /// ```no_run
    /// # use unosend::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unosend::Error> {
    /// let client = Client::new("un_live_xxx")?;
    /// let audience = client.audiences().create("Newsletter").await?;
    /// println!("{}", audience.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, name: &str) -> Result<Audience> {
        let data = self
            .client
            .request(Method::POST, "/audiences", Some(&json!({ "name": name })))
            .await?;
        Ok(Audience::from_json(&data))
    }

    /// Fetch an audience with its current contact count.
    pub async fn get(&self, id: &str) -> Result<Audience> {
        let data = self
            .client
            .request::<()>(Method::GET, &format!("/audiences/{id}"), None)
            .await?;
        Ok(Audience::from_json(&data))
    }

    /// List every audience on the account.
    pub async fn list(&self) -> Result<Vec<Audience>> {
        let data = self
            .client
            .request::<()>(Method::GET, "/audiences", None)
            .await?;
        Ok(list_from_json(&data, Audience::from_json))
    }

    /// Remove an audience. Returns the server's acknowledgement as-is.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.client
            .request::<()>(Method::DELETE, &format!("/audiences/{id}"), None)
            .await
    }
}

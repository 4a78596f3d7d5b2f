use crate::models::{Domain, list_from_json};
use crate::{Client, Result};
use reqwest::Method;
use serde_json::{Value, json};

/// Sending domain operations, obtained from [`Client::domains`].
#[derive(Debug, Clone, Copy)]
pub struct Domains<'c> {
    client: &'c Client,
}

impl<'c> Domains<'c> {
    pub(crate) const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Register a sending domain.
    ///
    /// The returned [`Domain`] lists the DNS records to publish before
    /// calling [`Domains::verify`].
    pub async fn create(&self, name: &str) -> Result<Domain> {
        let data = self
            .client
            .request(Method::POST, "/domains", Some(&json!({ "name": name })))
            .await?;
        Ok(Domain::from_json(&data))
    }

    /// Fetch a domain, including its current verification status.
    pub async fn get(&self, id: &str) -> Result<Domain> {
        let data = self
            .client
            .request::<()>(Method::GET, &format!("/domains/{id}"), None)
            .await?;
        Ok(Domain::from_json(&data))
    }

    /// Ask the server to check the domain's DNS records now.
    pub async fn verify(&self, id: &str) -> Result<Domain> {
        let data = self
            .client
            .request::<()>(Method::POST, &format!("/domains/{id}/verify"), None)
            .await?;
        Ok(Domain::from_json(&data))
    }

    /// List every sending domain on the account.
    ///
    /// # Examples
    /// ```no_run
    /// # use unosend::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unosend::Error> {
    /// let client = Client::new("un_live_xxx")?;
    /// for domain in client.domains().list().await? {
    ///     println!("{}: {}", domain.name, domain.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self) -> Result<Vec<Domain>> {
        let data = self
            .client
            .request::<()>(Method::GET, "/domains", None)
            .await?;
        Ok(list_from_json(&data, Domain::from_json))
    }

    /// Remove a domain. Returns the server's acknowledgement as-is.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.client
            .request::<()>(Method::DELETE, &format!("/domains/{id}"), None)
            .await
    }
}

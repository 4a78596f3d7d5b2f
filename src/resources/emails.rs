use crate::models::{Email, list_from_json};
use crate::{Client, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One or more email addresses.
///
/// Always serialized as a JSON array, so a single address can be passed as a
/// plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Recipients(Vec<String>);

impl Recipients {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Recipients {
    fn from(addr: &str) -> Self {
        Self(vec![addr.to_string()])
    }
}

impl From<String> for Recipients {
    fn from(addr: String) -> Self {
        Self(vec![addr])
    }
}

impl From<&String> for Recipients {
    fn from(addr: &String) -> Self {
        Self(vec![addr.clone()])
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addrs: Vec<String>) -> Self {
        Self(addrs)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addrs: Vec<&str>) -> Self {
        Self(addrs.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Recipients {
    fn from(addrs: &[&str]) -> Self {
        Self(addrs.iter().map(|a| a.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(addrs: [&str; N]) -> Self {
        Self(addrs.iter().map(|a| a.to_string()).collect())
    }
}

/// Tag attached to an outgoing email, reported back in events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

/// File attached to an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    /// Base64-encoded file content.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Attachment {
    /// Attachment from raw bytes; the content is base64-encoded here.
    pub fn from_bytes(filename: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        Self {
            filename: filename.into(),
            content: STANDARD.encode(bytes),
            content_type: None,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// An email to send.
///
/// Optional fields left unset are omitted from the request body entirely.
///
/// # Examples
/// ```
/// use unosend::SendEmail;
///
/// let email = SendEmail::new("hello@acme.com", "user@example.com", "Welcome")
///     .html("<p>Hi there</p>")
///     .cc(["team@acme.com", "audit@acme.com"])
///     .tag("campaign", "onboarding");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmail {
    from: String,
    to: Recipients,
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cc: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bcc: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<Attachment>>,
}

impl SendEmail {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<Recipients>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            html: None,
            text: None,
            reply_to: None,
            cc: None,
            bcc: None,
            headers: None,
            tags: None,
            attachments: None,
        }
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Set carbon-copy recipients. An empty list leaves the field unset.
    pub fn cc(mut self, cc: impl Into<Recipients>) -> Self {
        let cc: Recipients = cc.into();
        self.cc = Some(cc).filter(|r| !r.is_empty());
        self
    }

    /// Set blind carbon-copy recipients. An empty list leaves the field unset.
    pub fn bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        let bcc: Recipients = bcc.into();
        self.bcc = Some(bcc).filter(|r| !r.is_empty());
        self
    }

    /// Add a custom MIME header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(Tag {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .push(attachment);
        self
    }
}

/// Page window for [`Emails::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Email operations, obtained from [`Client::emails`].
#[derive(Debug, Clone, Copy)]
pub struct Emails<'c> {
    client: &'c Client,
}

impl<'c> Emails<'c> {
    pub(crate) const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Send an email.
    ///
    /// # Examples
    /// ```no_run
    /// # use unosend::{Client, SendEmail};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unosend::Error> {
    /// let client = Client::new("un_live_xxx")?;
    /// let sent = client
    ///     .emails()
    ///     .send(&SendEmail::new("hello@acme.com", "user@example.com", "Hi").text("Hello!"))
    ///     .await?;
    /// println!("{} is {}", sent.id, sent.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, email: &SendEmail) -> Result<Email> {
        let data = self
            .client
            .request(Method::POST, "/emails", Some(email))
            .await?;
        Ok(Email::from_json(&data))
    }

    /// Fetch a single email by id.
    pub async fn get(&self, id: &str) -> Result<Email> {
        let data = self
            .client
            .request::<()>(Method::GET, &format!("/emails/{id}"), None)
            .await?;
        Ok(Email::from_json(&data))
    }

    /// List sent emails, newest first.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<Email>> {
        let data = self
            .client
            .request_with_query::<(), _>(Method::GET, "/emails", Some(options), None)
            .await?;
        Ok(list_from_json(&data, Email::from_json))
    }

    /// Cancel an email that is still queued.
    ///
    /// Returns the server's acknowledgement as-is.
    pub async fn cancel(&self, id: &str) -> Result<Value> {
        self.client
            .request::<()>(Method::POST, &format!("/emails/{id}/cancel"), None)
            .await
    }
}

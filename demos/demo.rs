use unosend::{Client, CreateContact, ListOptions, SendEmail, UpdateContact};

#[tokio::main]
async fn main() -> Result<(), unosend::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let api_key = std::env::args().nth(1).unwrap_or_default();
    let client = Client::new(api_key)?;

    let domain = client.domains().create("example.com").await?;
    println!("Domain {} is {}; publish:", domain.name, domain.status);
    for record in &domain.records {
        println!("  {} {} {} (ttl {})", record.record_type, record.name, record.value, record.ttl);
    }

    let email = SendEmail::new("hello@example.com", "user@example.com", "Hello from Rust")
        .html("<p>It works!</p>")
        .tag("source", "demo");
    match client.emails().send(&email).await {
        Ok(sent) => println!("Sent {} ({})", sent.id, sent.status),
        Err(err) => println!("Send failed: {} (code {})", err.message(), err.code()),
    }

    for email in client.emails().list(&ListOptions::default()).await? {
        println!("{} -> {:?}: {}", email.from, email.to, email.subject);
    }

    let audience = client.audiences().create("Demo").await?;
    let contact = client
        .contacts()
        .create(&CreateContact::new(&audience.id, "user@example.com").first_name("Ada"))
        .await?;
    client
        .contacts()
        .update(&contact.id, &UpdateContact::new().unsubscribed(true))
        .await?;
    println!("{} contacts in {}", client.contacts().list(&audience.id).await?.len(), audience.name);

    client.contacts().delete(&contact.id).await?;
    client.audiences().delete(&audience.id).await?;
    client.close();
    Ok(())
}

use std::io;

use fox::{Credentials, FoxClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let to = required_env("TO")?;
    let from = required_env("FROM")?;
    let media_url = std::env::var("MEDIA_URL").unwrap_or_else(|_| {
        "https://www.twilio.com/docs/documents/25/justthefaxmaam.pdf".to_owned()
    });

    let client = FoxClient::new(Credentials::from_env());
    let fax = client.send(&to, &from, &media_url, None).await?;
    println!("sid: {}, status: {}, quality: {}", fax.sid, fax.status, fax.quality);

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

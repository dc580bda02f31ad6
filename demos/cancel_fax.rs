use std::io;

use fox::{Credentials, FoxClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sid = std::env::args().nth(1).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "usage: cancel_fax <FAX_SID>")
    })?;

    let client = FoxClient::new(Credentials::from_env());
    let fax = client.cancel(&sid).await?;
    println!("sid: {}, status: {}", fax.sid, fax.status);

    Ok(())
}

use fox::{Credentials, FoxClient, ListOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = ListOptions {
        from: std::env::var("FROM").ok(),
        to: std::env::var("TO").ok(),
        ..Default::default()
    };

    let client = FoxClient::new(Credentials::from_env());
    let page = client.list(Some(&options)).await?;
    for fax in &page.faxes {
        println!("{} {} -> {} [{}]", fax.sid, fax.from, fax.to, fax.status);
    }
    if let Some(next) = page.meta.next_page_url.as_deref() {
        println!("next page: {next}");
    }

    Ok(())
}

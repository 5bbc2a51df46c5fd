//! astrascan - Astra Linux exposure sweep backed by Shodan.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    astrascan_cli::run().await
}

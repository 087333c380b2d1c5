use watcher::runtime::{boot, watch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();
    let config = boot::boot()?;
    watch::run(config).await?;
    Ok(())
}

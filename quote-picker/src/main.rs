use anyhow::Result;

use quote_picker::settings::Settings;
use quote_picker::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;

    // Logging is initialized in App::run() once the filter is known
    App::new(settings).run().await?;

    Ok(())
}

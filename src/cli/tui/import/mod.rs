/// Interactive import wizard implementation
pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;

use crate::wizard::state::ImportMethod;
use crate::Result;

/// Entry point for the import wizard
pub async fn run(method: Option<ImportMethod>, extension_installed: bool) -> Result<()> {
    let app = app::App::new(method, extension_installed);
    app.run().await
}

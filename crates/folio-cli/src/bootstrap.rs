use anyhow::Context;
use folio_config::FolioConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply `--base-url`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FolioConfig> {
    let mut config = FolioConfig::load_with_dotenv().context("failed to load folio config")?;

    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config
            .validate()
            .with_context(|| format!("invalid --base-url '{base_url}'"))?;
    }

    Ok(config)
}

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct Config {
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ViewConfig {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub only_in_stock: bool,
}

pub fn load() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("App").required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

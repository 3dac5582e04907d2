use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid geometry: item_extent={item_extent}, visible_half_count={visible_half_count}")]
    InvalidGeometry {
        item_extent: f64,
        visible_half_count: i64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid item entry: {0}")]
    InvalidItem(String),
}

pub type Result<T> = std::result::Result<T, Error>;

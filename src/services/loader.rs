use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{Catalog, CategoryDefinition, StyleConfig};

/// Where a JSON document comes from: a local file or an HTTP(S) URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceSource {
    File(PathBuf),
    Url(String),
}

impl ResourceSource {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{resource} is not valid JSON: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

async fn read_text(source: &ResourceSource) -> Result<String, LoadError> {
    match source {
        ResourceSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Read {
                    path: path.clone(),
                    source,
                })
        }
        ResourceSource::Url(url) => {
            let fetch_error = |source| LoadError::Fetch {
                url: url.clone(),
                source,
            };
            reqwest::get(url)
                .await
                .and_then(|response| response.error_for_status())
                .map_err(fetch_error)?
                .text()
                .await
                .map_err(fetch_error)
        }
    }
}

pub async fn load_json<T: DeserializeOwned>(source: &ResourceSource) -> Result<T, LoadError> {
    let body = read_text(source).await?;
    debug!(%source, bytes = body.len(), "loaded resource");
    serde_json::from_str(&body).map_err(|err| LoadError::Parse {
        resource: source.to_string(),
        source: err,
    })
}

pub async fn load_style_config(source: &ResourceSource) -> Result<StyleConfig, LoadError> {
    load_json(source).await
}

pub async fn load_catalog(source: &ResourceSource) -> Result<Catalog, LoadError> {
    let definitions: Vec<CategoryDefinition> = load_json(source).await?;
    Ok(Catalog::from_definitions(definitions))
}

/// Both documents a window needs before it can render.
pub async fn load_board(
    style: &ResourceSource,
    categories: &ResourceSource,
) -> Result<(StyleConfig, Catalog), LoadError> {
    let style_config = load_style_config(style).await?;
    let catalog = load_catalog(categories).await?;
    Ok((style_config, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_sources() {
        assert_eq!(
            ResourceSource::parse(" https://example.com/categories.json "),
            ResourceSource::Url("https://example.com/categories.json".into())
        );
        assert_eq!(
            ResourceSource::parse("data/config.json"),
            ResourceSource::File(PathBuf::from("data/config.json"))
        );
    }

    #[tokio::test]
    async fn loads_catalog_from_file() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = temp_dir.path().join("categories.json");
        fs::write(
            &path,
            r#"[{ "name": "Food", "options": [{ "name": "Dish", "choices": ["Pizza", "Sushi", "Tacos"] }] }]"#,
        )
        .unwrap();

        let catalog = load_catalog(&ResourceSource::File(path)).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories[0].options[0].choices.len(), 3);
    }

    #[tokio::test]
    async fn reports_invalid_json() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ option: ").unwrap();

        let err = load_style_config(&ResourceSource::File(path))
            .await
            .expect_err("broken JSON must fail");
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[tokio::test]
    async fn reports_missing_file() {
        let err = load_catalog(&ResourceSource::File(PathBuf::from("/nonexistent/categories.json")))
            .await
            .expect_err("missing file must fail");
        assert!(matches!(err, LoadError::Read { .. }));
    }
}

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::error::Error;

pub trait ResourceLoader {
    fn load(&self, resource: &str) -> Result<String, Error>;
}

/// Loads resources from files below a root directory.
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    root: PathBuf,
}

impl FsResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resource_root.clone())
    }

    pub fn path_of(&self, resource: &str) -> PathBuf {
        self.root.join(resource.trim_start_matches('/'))
    }
}

impl Default for FsResourceLoader {
    fn default() -> Self {
        Self::from_config(&Config::from_env())
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load(&self, resource: &str) -> Result<String, Error> {
        let path = self.path_of(resource);
        debug!("Loading resource {} from {}", resource, path.display());

        match std::fs::read(&path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(source) if source.kind() == ErrorKind::NotFound => Err(Error::ResourceNotFound {
                resource: resource.to_string(),
                path,
                source,
            }),
            Err(source) => Err(Error::ResourceRead {
                resource: resource.to_string(),
                path,
                source,
            }),
        }
    }
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for &T {
    fn load(&self, resource: &str) -> Result<String, Error> {
        (**self).load(resource)
    }
}

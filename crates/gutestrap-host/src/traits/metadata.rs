//! Metadata retrieval trait.

use crate::{HostResult, PluginHeaders};

/// Retrieves plugin header metadata from a URL.
///
/// Calls block until the document has been read.
pub trait MetadataSource {
    /// Fetches the document at `url` and returns its plugin headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be retrieved.
    fn fetch(&self, url: &str) -> HostResult<PluginHeaders>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for Box<T> {
    fn fetch(&self, url: &str) -> HostResult<PluginHeaders> {
        (**self).fetch(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeaderField, HostError};

    struct FixedSource(Option<&'static str>);

    impl MetadataSource for FixedSource {
        fn fetch(&self, url: &str) -> HostResult<PluginHeaders> {
            match self.0 {
                Some(version) => Ok(PluginHeaders::new().with(HeaderField::Version, version)),
                None => Err(HostError::Fetch {
                    url: url.to_string(),
                    reason: "offline".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_boxed_source_delegates() {
        let source: Box<dyn MetadataSource> = Box::new(FixedSource(Some("1.0.0")));
        let headers = source.fetch("https://example.com").unwrap();
        assert_eq!(headers.get(HeaderField::Version), Some("1.0.0"));
    }

    #[test]
    fn test_boxed_source_propagates_errors() {
        let source: Box<dyn MetadataSource> = Box::new(FixedSource(None));
        assert!(source.fetch("https://example.com").is_err());
    }
}

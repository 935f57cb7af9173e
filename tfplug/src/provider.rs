//! Provider-level data shared with resources and data sources

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque carrier for whatever the provider hands to its resources and
/// data sources after `configure` (usually an API client)
///
/// The carrier remembers the stored type's name so a failed downcast can
/// report what was actually configured.
#[derive(Clone)]
pub struct ProviderData {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ProviderData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the concrete type stored in the carrier
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }
}

impl fmt::Debug for ProviderData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderData")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ApiHandle {
        endpoint: String,
    }

    #[test]
    fn downcast_to_stored_type() {
        let data = ProviderData::new(ApiHandle {
            endpoint: "http://localhost".to_string(),
        });

        let handle = data.downcast::<ApiHandle>().unwrap();
        assert_eq!(handle.endpoint, "http://localhost");
    }

    #[test]
    fn downcast_to_other_type_fails() {
        let data = ProviderData::new(42_u32);

        assert!(data.downcast::<String>().is_none());
        assert_eq!(data.type_name(), "u32");
    }
}

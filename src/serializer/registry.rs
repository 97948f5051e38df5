use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::{JsonSerializerV1, JsonSerializerV2, Serializer};
use crate::utils::error::RegistryError;

/// Lookup table from negotiated version string to serializer.
///
/// The registry maps each `vsn` to a shared serializer instance, so adding a
/// wire format means registering one more entry rather than touching call
/// sites. `SerializerRegistry::default()` knows both JSON formats and falls
/// back to `"1.0.0"` for clients that do not request a version.
#[derive(Debug, Clone)]
pub struct SerializerRegistry {
    serializers: HashMap<&'static str, Arc<dyn Serializer>>,
    default_vsn: String,
}

impl SerializerRegistry {
    /// Creates an empty registry. The default version starts as `"1.0.0"`
    /// and only resolves once a serializer is registered under it.
    pub fn new() -> Self {
        Self {
            serializers: HashMap::new(),
            default_vsn: JsonSerializerV1::VSN.to_string(),
        }
    }

    /// Creates a registry with both JSON formats and the given default.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnsupportedVersion`] if `default_vsn` is not
    /// one of the built-in versions.
    pub fn with_default_vsn(default_vsn: &str) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        registry.set_default_vsn(default_vsn)?;
        Ok(registry)
    }

    /// Adds a serializer, keyed by its [`Serializer::vsn`].
    ///
    /// A serializer already registered under the same version is replaced.
    pub fn register(&mut self, serializer: Arc<dyn Serializer>) -> &mut Self {
        let vsn = serializer.vsn();
        if self.serializers.insert(vsn, serializer).is_some() {
            warn!(vsn, "replaced existing serializer");
        } else {
            debug!(vsn, "registered serializer");
        }
        self
    }

    /// Changes the version used when a client requests none.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnsupportedVersion`] if nothing is registered
    /// under `vsn`.
    pub fn set_default_vsn(&mut self, vsn: &str) -> Result<(), RegistryError> {
        if !self.serializers.contains_key(vsn) {
            return Err(RegistryError::UnsupportedVersion(vsn.to_string()));
        }
        self.default_vsn = vsn.to_string();
        Ok(())
    }

    pub fn default_vsn(&self) -> &str {
        &self.default_vsn
    }

    /// Returns the serializer registered under `vsn`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnsupportedVersion`] for unknown versions.
    pub fn get(&self, vsn: &str) -> Result<Arc<dyn Serializer>, RegistryError> {
        self.serializers
            .get(vsn)
            .cloned()
            .ok_or_else(|| RegistryError::UnsupportedVersion(vsn.to_string()))
    }

    /// Like [`get`](Self::get), but a missing version selects the default.
    pub fn resolve(&self, requested: Option<&str>) -> Result<Arc<dyn Serializer>, RegistryError> {
        self.get(requested.unwrap_or(&self.default_vsn))
    }

    /// Registered versions in ascending order.
    pub fn versions(&self) -> Vec<&'static str> {
        let mut versions: Vec<_> = self.serializers.keys().copied().collect();
        versions.sort_unstable();
        versions
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register(Arc::new(JsonSerializerV1::new()))
            .register(Arc::new(JsonSerializerV2::new()));
        registry
    }
}

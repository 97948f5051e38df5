use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the serializer registry and for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub codec: CodecSettings,
    pub log: LogSettings,
}

/// Configuration settings for the serializer registry.
///
/// `default_vsn` selects the wire format used when a peer does not request one.
#[derive(Debug, Deserialize, Clone)]
pub struct CodecSettings {
    pub default_vsn: String,
}

/// Configuration settings for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub codec: Option<PartialCodecSettings>,
    pub log: Option<PartialLogSettings>,
}

/// Partial codec settings.
#[derive(Debug, Deserialize)]
pub struct PartialCodecSettings {
    pub default_vsn: Option<String>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Peers that omit a version speak the v1 format.
impl Default for Settings {
    fn default() -> Self {
        Self {
            codec: CodecSettings {
                default_vsn: "1.0.0".to_string(),
            },
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}

//! Session Settings Crate
//!
//! Settings that control session telemetry: whether sessions are enabled,
//! how long a backgrounded session survives, and the sampling rate.
//!
//! # Layers
//!
//! - [`LocalOverrideSettings`] reads developer overrides from the app's
//!   bundled configuration file (a JSON object standing in for the bundle's
//!   key/value dictionary).
//! - [`SdkDefaultSettings`] holds the values compiled into the SDK.
//! - [`LayeredSettings`] asks each layer in order and falls back to the
//!   SDK defaults.
//!
//! # Example
//!
//! ```rust
//! use session_settings::{BundleConfig, LayeredSettings, LocalOverrideSettings, SessionsSettings};
//!
//! let bundle = BundleConfig::from_json_str(r#"{ "FirebaseSessionsSampingRate": "0.5" }"#).unwrap();
//! let settings = LayeredSettings::new().with_layer(LocalOverrideSettings::new(bundle));
//!
//! assert_eq!(settings.sampling_rate(), Some(0.5));
//! assert!(settings.resolved_sessions_enabled());
//! ```

pub mod defaults;
pub mod error;
pub mod layered;
pub mod local_override;
pub mod provider;
pub mod source;

pub use defaults::SdkDefaultSettings;
pub use error::{Result, SettingsError};
pub use layered::LayeredSettings;
pub use local_override::LocalOverrideSettings;
pub use provider::{SessionsSettings, SettingsLayer, SettingsProvider};
pub use source::{BundleConfig, SettingsSource};

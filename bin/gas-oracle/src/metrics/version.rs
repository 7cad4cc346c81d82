//! [`VersionInfo`] metrics

use metrics::gauge;

/// Build information for the binary, exposed as a prometheus gauge.
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// The version of the application.
    pub version: &'static str,
    /// The build timestamp of the application.
    pub build_timestamp: &'static str,
    /// The cargo features enabled for the build.
    pub cargo_features: &'static str,
    /// The target triple for the build.
    pub target_triple: &'static str,
    /// The build profile (e.g., debug or release).
    pub build_profile: &'static str,
}

impl VersionInfo {
    /// Creates a new instance of [`VersionInfo`] from the constants defined in [`crate::version`]
    /// at compile time.
    pub const fn from_build() -> Self {
        Self {
            version: crate::version::CARGO_PKG_VERSION,
            build_timestamp: crate::version::VERGEN_BUILD_TIMESTAMP,
            cargo_features: crate::version::VERGEN_CARGO_FEATURES,
            target_triple: crate::version::VERGEN_CARGO_TARGET_TRIPLE,
            build_profile: crate::version::BUILD_PROFILE_NAME,
        }
    }

    /// Exposes the version information as the `gas_oracle_info` gauge.
    pub fn register_version_metrics(&self) {
        // An empty feature list would drop the label.
        let features = if self.cargo_features.is_empty() { "none" } else { self.cargo_features };

        let labels: [(&str, &str); 5] = [
            ("version", self.version),
            ("build_timestamp", self.build_timestamp),
            ("cargo_features", features),
            ("target_triple", self.target_triple),
            ("build_profile", self.build_profile),
        ];

        gauge!("gas_oracle_info", &labels).set(1);
    }
}

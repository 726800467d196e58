use serde::{Deserialize, Serialize};

/// Default mailbox size for each store actor.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Start-up options for a [`Storefront`](crate::lifecycle::Storefront).
///
/// Missing fields fall back to [`Default`], so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Mailbox size for each store actor. Values below 1 are raised to 1.
    pub channel_capacity: usize,
    /// Load the default products into the catalog at start-up.
    pub seed_catalog: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed_catalog: true,
        }
    }
}

impl StorefrontConfig {
    /// `tokio::sync::mpsc` panics on a zero-sized channel.
    pub(crate) fn effective_capacity(&self) -> usize {
        self.channel_capacity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: StorefrontConfig = serde_json::from_str(r#"{"seedCatalog": false}"#).unwrap();
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert!(!config.seed_catalog);

        let empty: StorefrontConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, StorefrontConfig::default());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let config = StorefrontConfig {
            channel_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_capacity(), 1);
    }
}

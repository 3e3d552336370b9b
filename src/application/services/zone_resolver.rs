//! Hosting zone resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::capabilities::ZoneLookup;
use crate::domain::entities::ResolvedZone;
use crate::error::HostingError;

/// Resolves the pre-existing DNS hosting zone a site lives in.
///
/// The zone is looked up once per assembly and the handle is shared by
/// certificate validation and the final alias record. No local existence
/// check is performed; a missing zone fails at apply time in the engine.
pub struct ZoneResolver<Z: ZoneLookup> {
    zones: Arc<Z>,
}

impl<Z: ZoneLookup> ZoneResolver<Z> {
    /// Creates a new zone resolver.
    pub fn new(zones: Arc<Z>) -> Self {
        Self { zones }
    }

    /// Resolves the zone named `zone_name`.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the lookup cannot be
    /// declared.
    pub fn resolve(&self, zone_name: &str) -> Result<ResolvedZone, HostingError> {
        debug!(zone = %zone_name, "resolving hosting zone");
        self.zones.lookup(zone_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capabilities::MockZoneLookup;
    use crate::domain::entities::ResourceId;

    #[test]
    fn test_resolve_passes_zone_name_through() {
        let mut mock_zones = MockZoneLookup::new();
        mock_zones
            .expect_lookup()
            .withf(|name| name == "example.com")
            .times(1)
            .returning(|name| {
                Ok(ResolvedZone {
                    id: ResourceId::new("zone-1"),
                    name: name.to_string(),
                })
            });

        let resolver = ZoneResolver::new(Arc::new(mock_zones));
        let zone = resolver.resolve("example.com").unwrap();

        assert_eq!(zone.name, "example.com");
        assert_eq!(zone.id.as_str(), "zone-1");
    }
}

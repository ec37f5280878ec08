use super::{Crs, TransformContext};
use crate::error::Result;

/// Map-side configuration of the editor: the reference system vertices are
/// edited in, and the operations available to reach it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSettings {
    pub destination_crs: Crs,
    pub transform_context: TransformContext,
}

impl MapSettings {
    /// Creates settings targeting `destination_crs` with an empty context.
    #[must_use]
    pub fn new(destination_crs: Crs) -> Self {
        Self {
            destination_crs,
            transform_context: TransformContext::default(),
        }
    }

    /// Creates settings from an authority id such as `EPSG:21781`.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier cannot be parsed.
    pub fn from_auth_id(auth_id: &str) -> Result<Self> {
        Ok(Self::new(auth_id.parse()?))
    }

    /// Replaces the transform context.
    #[must_use]
    pub fn with_transform_context(mut self, context: TransformContext) -> Self {
        self.transform_context = context;
        self
    }
}

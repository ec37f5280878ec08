mod affine;
mod crs;
mod provider;
mod settings;

pub use affine::{AffineTransform, CoordinateTransform};
pub use crs::Crs;
pub use provider::{ContextTransformProvider, TransformContext, TransformProvider};
pub use settings::MapSettings;

//! Domain types for the color identity system.

mod color;
mod descriptor;
mod seed;

pub use color::OklchColor;
pub use descriptor::{
    Accessibility, Analysis, ColorDescriptor, ColorIntelligence, ContrastReport, Harmonies,
    SemanticSuggestions, Temperature, WeightReport, MISSING_FIELD_PLACEHOLDER,
};
pub use seed::SeedItem;

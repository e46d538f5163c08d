//! Deterministic descriptor embeddings.
//!
//! The cache stores one vector per entry so the external search surface can
//! rank colors by similarity. The vector is a pure projection of the math
//! fields of the descriptor — no learned model, no randomness — so two
//! processes derive identical embeddings for identical descriptors.

use chroma_core::types::{ColorDescriptor, Temperature};

/// Dimensions of a descriptor embedding:
/// 4 base coordinates (L, C, sin H, cos H) + alpha + 3 temperature one-hot
/// + lightness flag + 2 weights + 2 WCAG ratios + 2 APCA scores + 11 scale
/// lightnesses.
pub const EMBEDDING_DIM: usize = 26;

/// Highest WCAG contrast ratio, used for normalization.
const WCAG_RATIO_CEILING: f32 = 21.0;
/// APCA output scale, used for normalization.
const APCA_CEILING: f32 = 108.0;
/// Chroma considered fully saturated for the embedding.
const CHROMA_CEILING: f32 = 0.37;

/// Project a descriptor onto its embedding, L2-normalized.
pub fn derive_embedding(descriptor: &ColorDescriptor) -> Vec<f32> {
    let base = descriptor.base;
    let hue_radians = base.h().to_radians();
    let accessibility = &descriptor.accessibility;

    let mut vector: Vec<f32> = Vec::with_capacity(EMBEDDING_DIM);
    vector.push(base.l() as f32);
    vector.push(((base.c() as f32) / CHROMA_CEILING).min(1.0));
    vector.push(hue_radians.sin() as f32);
    vector.push(hue_radians.cos() as f32);
    vector.push(base.alpha().unwrap_or(1.0) as f32);

    let flag = |set: bool| if set { 1.0_f32 } else { 0.0 };
    let temperature = descriptor.analysis.temperature;
    vector.push(flag(temperature == Temperature::Warm));
    vector.push(flag(temperature == Temperature::Neutral));
    vector.push(flag(temperature == Temperature::Cool));
    vector.push(flag(descriptor.analysis.is_light));

    vector.push(descriptor.perceptual_weight.score as f32);
    vector.push(descriptor.atmospheric_weight.score as f32);

    vector.push(accessibility.on_white.ratio as f32 / WCAG_RATIO_CEILING);
    vector.push(accessibility.on_black.ratio as f32 / WCAG_RATIO_CEILING);
    vector.push(accessibility.apca_on_white as f32 / APCA_CEILING);
    vector.push(accessibility.apca_on_black as f32 / APCA_CEILING);

    for step in &descriptor.scale {
        vector.push(step.l() as f32);
    }

    debug_assert_eq!(vector.len(), EMBEDDING_DIM);
    l2_normalize(&mut vector);
    vector
}

fn l2_normalize(vector: &mut [f32]) {
    let magnitude = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        for v in vector.iter_mut() {
            *v /= magnitude;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::engine::describe;
    use chroma_core::OklchColor;

    fn embedding_for(l: f64, c: f64, h: f64) -> Vec<f32> {
        derive_embedding(&describe(&OklchColor::new(l, c, h).unwrap()))
    }

    #[test]
    fn test_dimension_and_normalization() {
        let embedding = embedding_for(0.5, 0.12, 240.0);
        assert_eq!(embedding.len(), EMBEDDING_DIM);
        let magnitude = embedding.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(embedding_for(0.7, 0.15, 260.0), embedding_for(0.7, 0.15, 260.0));
    }

    #[test]
    fn test_distinct_colors_distinct_embeddings() {
        assert_ne!(embedding_for(0.2, 0.05, 30.0), embedding_for(0.8, 0.3, 200.0));
    }

    #[test]
    fn test_intelligence_does_not_change_embedding() {
        let descriptor = describe(&OklchColor::new(0.5, 0.12, 240.0).unwrap());
        let mut augmented = descriptor.clone();
        augmented.intelligence = Some(serde_json::from_str(r#"{"suggestedName":"x"}"#).unwrap());
        assert_eq!(derive_embedding(&descriptor), derive_embedding(&augmented));
    }
}

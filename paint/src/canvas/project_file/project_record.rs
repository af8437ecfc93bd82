// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The saved form of a drawing. Layers are listed bottom to top.
//!
//! ```json
//! {
//!   "version": 1,
//!   "width": 64,
//!   "height": 64,
//!   "nextLayerId": 3,
//!   "layers": [
//!     { "id": 1, "name": "Background", "visible": true, "encodedImage": "data:image/png;base64,..." },
//!     { "id": 2, "name": "Ink", "visible": false, "encodedImage": "data:image/png;base64,..." }
//!   ]
//! }
//! ```
//!
//! Converting a record back into a [`LayerStack`] validates everything first, and
//! either produces a complete stack or an error. Nothing is half loaded.

use serde::{Deserialize, Serialize};

use super::{decode_data_url, encode_data_url};
use crate::{CanvasError, CanvasSize, Layer, LayerId, LayerStack, PixelSurface,
            canvas_size_problem, height, peek_encoded_size, width};

pub const CURRENT_PROJECT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub version: u32,
    pub width: u32,
    pub height: u32,
    pub next_layer_id: LayerId,
    pub layers: Vec<LayerRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerRecord {
    pub id: LayerId,
    pub name: String,
    pub visible: bool,
    /// PNG data URL, see [`super::data_url`].
    pub encoded_image: String,
}

impl ProjectRecord {
    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize { width(self.width) + height(self.height) }

    /// # Errors
    ///
    /// [`CanvasError::ImageEncode`] if a layer can't be encoded.
    pub fn try_from_layer_stack(stack: &LayerStack) -> Result<Self, CanvasError> {
        let size = stack.canvas_size();
        let layers = stack
            .iter_bottom_to_top()
            .map(|layer| -> Result<LayerRecord, CanvasError> {
                Ok(LayerRecord {
                    id: layer.id(),
                    name: layer.name().to_string(),
                    visible: layer.is_visible(),
                    encoded_image: encode_data_url(&layer.surface().encode()?),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: CURRENT_PROJECT_VERSION,
            width: *size.width,
            height: *size.height,
            next_layer_id: stack.next_layer_id(),
            layers,
        })
    }

    /// Validate and rebuild the stack. The top layer is active.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::UnsupportedProjectVersion`] if `version` is not
    ///   [`CURRENT_PROJECT_VERSION`].
    /// - [`CanvasError::MalformedProject`] for a zero dimension or one above
    ///   [`crate::MAX_CANVAS_SIDE`], no layers, bad ids, or an image that is not a PNG
    ///   data URL.
    /// - [`CanvasError::ImageDecode`] if an image is not a valid PNG.
    /// - [`CanvasError::DimensionMismatch`] if an image is not the canvas size. This is
    ///   read from the PNG header, before any pixels are decoded.
    pub fn try_to_layer_stack(&self) -> Result<LayerStack, CanvasError> {
        if self.version != CURRENT_PROJECT_VERSION {
            return Err(CanvasError::UnsupportedProjectVersion {
                found: self.version,
                expected: CURRENT_PROJECT_VERSION,
            });
        }
        let size = self.canvas_size();
        if let Some(reason) = canvas_size_problem(size) {
            return Err(CanvasError::malformed(reason));
        }

        let mut layers = Vec::with_capacity(self.layers.len());
        for record in &self.layers {
            let encoded = decode_data_url(&record.encoded_image)?;
            let actual = peek_encoded_size(encoded.as_bytes())?;
            if actual != size {
                return Err(CanvasError::DimensionMismatch {
                    expected: size,
                    actual,
                });
            }
            let surface = PixelSurface::decode(size, &encoded)?;
            layers.push(
                Layer::new(record.id, record.name.clone(), surface)
                    .with_visible(record.visible),
            );
        }

        LayerStack::try_from_layers(size, layers, self.next_layer_id)
    }

    /// # Errors
    ///
    /// [`CanvasError::MalformedProject`] if `json` is not a project record.
    pub fn try_from_json_str(json: &str) -> Result<Self, CanvasError> {
        serde_json::from_str(json).map_err(|error| CanvasError::malformed(error.to_string()))
    }

    /// # Errors
    ///
    /// Only if serialization itself fails, which it does not for this type.
    pub fn try_to_json_string(&self) -> Result<String, CanvasError> {
        serde_json::to_string_pretty(self)
            .map_err(|error| CanvasError::malformed(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RgbColor, RgbaColor, assert_eq2};

    fn create_test_stack() -> LayerStack {
        let mut stack = LayerStack::new(width(3) + height(2));
        stack.add_layer("Background").unwrap();
        let ink = stack.add_layer("Ink").unwrap();
        stack
            .surface_mut(ink)
            .unwrap()
            .set_pixel(2, 1, RgbaColor::new(9, 8, 7, 200));
        let hidden = stack.add_layer("Hidden").unwrap();
        stack.toggle_visible(hidden).unwrap();
        stack.delete_layer(hidden).unwrap();
        stack.add_layer("Top").unwrap();
        stack.toggle_visible(LayerId(4)).unwrap();
        stack
    }

    #[test]
    fn test_record_shape() {
        let record = ProjectRecord::try_from_layer_stack(&create_test_stack()).unwrap();
        assert_eq2!(record.version, CURRENT_PROJECT_VERSION);
        assert_eq2!(record.canvas_size(), width(3) + height(2));
        assert_eq2!(record.next_layer_id, LayerId(5));
        let summary: Vec<(u32, &str, bool)> = record
            .layers
            .iter()
            .map(|it| (it.id.0, it.name.as_str(), it.visible))
            .collect();
        assert_eq2!(
            summary,
            vec![(1, "Background", true), (2, "Ink", true), (4, "Top", false)]
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq2!(json["nextLayerId"], 5);
        assert!(
            json["layers"][0]["encodedImage"]
                .as_str()
                .unwrap()
                .starts_with("data:image/png;base64,")
        );
    }

    #[test]
    fn test_round_trip_through_json() {
        let stack = create_test_stack();
        let json = ProjectRecord::try_from_layer_stack(&stack)
            .unwrap()
            .try_to_json_string()
            .unwrap();
        let restored = ProjectRecord::try_from_json_str(&json)
            .unwrap()
            .try_to_layer_stack()
            .unwrap();

        assert_eq2!(restored.paint_order(), stack.paint_order());
        assert_eq2!(restored.next_layer_id(), stack.next_layer_id());
        assert_eq2!(restored.active_layer_id(), Some(LayerId(4)));
        for (a, b) in restored.iter_bottom_to_top().zip(stack.iter_bottom_to_top()) {
            assert_eq2!(a, b);
        }
        assert_eq2!(restored.composite_visible(), stack.composite_visible());
    }

    #[test]
    fn test_validation() {
        let valid = ProjectRecord::try_from_layer_stack(&create_test_stack()).unwrap();

        let mut record = valid.clone();
        record.version = 2;
        assert_eq2!(
            record.try_to_layer_stack().map(|_| ()),
            Err(CanvasError::UnsupportedProjectVersion {
                found: 2,
                expected: 1
            })
        );

        let mut record = valid.clone();
        record.width = 0;
        assert!(matches!(
            record.try_to_layer_stack(),
            Err(CanvasError::MalformedProject { .. })
        ));

        let mut record = valid.clone();
        record.width = u32::MAX;
        record.height = u32::MAX;
        assert!(matches!(
            record.try_to_layer_stack(),
            Err(CanvasError::MalformedProject { .. })
        ));

        let mut record = valid.clone();
        record.width = 4;
        assert_eq2!(
            record.try_to_layer_stack().map(|_| ()),
            Err(CanvasError::DimensionMismatch {
                expected: width(4) + height(2),
                actual: width(3) + height(2),
            })
        );

        let mut record = valid.clone();
        record.layers.clear();
        assert!(matches!(
            record.try_to_layer_stack(),
            Err(CanvasError::MalformedProject { .. })
        ));

        let mut record = valid.clone();
        record.layers[1].id = LayerId(1);
        assert!(matches!(
            record.try_to_layer_stack(),
            Err(CanvasError::MalformedProject { .. })
        ));

        let mut record = valid.clone();
        record.layers[2].encoded_image = "data:image/png;base64,AAAA".to_string();
        assert!(matches!(
            record.try_to_layer_stack(),
            Err(CanvasError::ImageDecode { .. })
        ));

        let mut record = valid;
        record.next_layer_id = LayerId(1);
        assert_eq2!(
            record.try_to_layer_stack().unwrap().next_layer_id(),
            LayerId(5)
        );
    }

    #[test]
    fn test_image_of_another_size_is_rejected() {
        let other = PixelSurface::new_opaque(width(30) + height(20), RgbColor::WHITE);
        let mut record = ProjectRecord::try_from_layer_stack(&create_test_stack()).unwrap();
        record.layers[1].encoded_image = encode_data_url(&other.encode().unwrap());
        assert_eq2!(
            record.try_to_layer_stack().map(|_| ()),
            Err(CanvasError::DimensionMismatch {
                expected: width(3) + height(2),
                actual: width(30) + height(20),
            })
        );
    }

    #[test]
    fn test_layer_ids_past_the_end() {
        let valid = ProjectRecord::try_from_layer_stack(&create_test_stack()).unwrap();

        let mut record = valid.clone();
        record.layers[2].id = LayerId(u32::MAX);
        assert!(matches!(
            record.try_to_layer_stack(),
            Err(CanvasError::MalformedProject { .. })
        ));

        // Loads, but adding a layer is refused instead of reusing an id.
        let mut record = valid;
        record.next_layer_id = LayerId(u32::MAX);
        let mut stack = record.try_to_layer_stack().unwrap();
        let before = stack.clone();
        assert_eq2!(
            stack.add_layer("New"),
            Err(CanvasError::LayerIdsExhausted {
                last_layer_id: LayerId(u32::MAX)
            })
        );
        assert_eq2!(stack, before);
    }

    #[test]
    fn test_malformed_json() {
        for it in ["", "[]", r#"{"version": 1}"#] {
            assert!(matches!(
                ProjectRecord::try_from_json_str(it),
                Err(CanvasError::MalformedProject { .. })
            ));
        }
    }

    #[test]
    fn test_background_is_white_after_round_trip() {
        let stack = create_test_stack();
        let record = ProjectRecord::try_from_layer_stack(&stack).unwrap();
        let restored = record.try_to_layer_stack().unwrap();
        assert_eq2!(
            restored
                .get(LayerId(1))
                .unwrap()
                .surface()
                .sample_color(0, 0),
            Some(RgbColor::WHITE)
        );
    }
}

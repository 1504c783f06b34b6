//! Viewport — camera transform, hit testing, and visibility culling
//!
//! A pure read+transform layer over the layout engine's output. The only
//! state it owns is the camera: a scale factor clamped to [0.2, 3.0] and an
//! additive pan offset, both mutated exclusively by explicit deltas from the
//! caller and never recomputed from the layout.
//!
//! Forward transform (layout space → screen space):
//!
//! ```text
//! screen = canvas_center + pan_offset + layout * scale
//! ```
//!
//! Hit testing inverse-transforms the tap through the same chain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::layout::{LayoutBounds, LayoutConfig, PositionedNode};

/// Minimum camera scale (zoomed out)
pub const MIN_SCALE: f32 = 0.2;
/// Maximum camera scale (zoomed in)
pub const MAX_SCALE: f32 = 3.0;

/// Camera state for one rendering surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportContext {
    /// Scale factor, clamped to [`MIN_SCALE`, `MAX_SCALE`]
    scale: f32,
    /// Pan offset in screen pixels
    pub pan_offset: (f32, f32),
    /// Canvas dimensions in screen pixels
    pub canvas_size: (f32, f32),
}

impl Default for ViewportContext {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

impl ViewportContext {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            scale: 1.0,
            pan_offset: (0.0, 0.0),
            canvas_size: (canvas_width, canvas_height),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Apply a multiplicative zoom delta, clamped
    pub fn zoom_by(&mut self, factor: f32) {
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Apply an additive pan delta in screen pixels
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_offset.0 += dx;
        self.pan_offset.1 += dy;
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan_offset = (0.0, 0.0);
    }

    /// Transform a layout-space point to screen space
    pub fn layout_to_screen(&self, point: (f32, f32)) -> (f32, f32) {
        let (cx, cy) = self.canvas_center();
        (
            cx + self.pan_offset.0 + point.0 * self.scale,
            cy + self.pan_offset.1 + point.1 * self.scale,
        )
    }

    /// Inverse-transform a screen-space point into layout space
    pub fn screen_to_layout(&self, point: (f32, f32)) -> (f32, f32) {
        let (cx, cy) = self.canvas_center();
        (
            (point.0 - cx - self.pan_offset.0) / self.scale,
            (point.1 - cy - self.pan_offset.1) / self.scale,
        )
    }

    /// First node (in positioned-sequence order) whose bounding box contains
    /// the tapped screen point, if any
    pub fn hit_test(
        &self,
        nodes: &[PositionedNode],
        config: &LayoutConfig,
        screen_point: (f32, f32),
    ) -> Option<Uuid> {
        let (lx, ly) = self.screen_to_layout(screen_point);
        nodes
            .iter()
            .find(|n| {
                lx >= n.x
                    && lx <= n.x + config.node_width
                    && ly >= n.y
                    && ly <= n.y + config.node_height
            })
            .map(|n| n.member_id)
    }

    /// The layout-space rectangle currently covered by the canvas
    pub fn visible_rect(&self) -> LayoutBounds {
        let (min_x, min_y) = self.screen_to_layout((0.0, 0.0));
        let (max_x, max_y) = self.screen_to_layout(self.canvas_size);
        LayoutBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Nodes whose bounding box intersects the viewport rectangle expanded
    /// by twice the larger node dimension (avoids pop-in at the edges)
    pub fn visible_set<'a>(
        &self,
        nodes: &'a [PositionedNode],
        config: &LayoutConfig,
        viewport: LayoutBounds,
    ) -> Vec<&'a PositionedNode> {
        let margin = 2.0 * config.node_width.max(config.node_height);
        let expanded = viewport.expanded(margin);
        nodes
            .iter()
            .filter(|n| expanded.intersects_box(n.x, n.y, config.node_width, config.node_height))
            .collect()
    }

    fn canvas_center(&self) -> (f32, f32) {
        (self.canvas_size.0 / 2.0, self.canvas_size.1 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_at(x: f32, y: f32) -> PositionedNode {
        PositionedNode {
            member_id: Uuid::new_v4(),
            label: "n".into(),
            depth: 0,
            x,
            y,
        }
    }

    #[test]
    fn test_scale_clamped_both_ways() {
        let mut vp = ViewportContext::default();
        vp.zoom_by(100.0);
        assert_eq!(vp.scale(), MAX_SCALE);
        vp.zoom_by(0.0001);
        assert_eq!(vp.scale(), MIN_SCALE);
    }

    #[test]
    fn test_pan_is_additive() {
        let mut vp = ViewportContext::default();
        vp.pan_by(10.0, -5.0);
        vp.pan_by(10.0, -5.0);
        assert_eq!(vp.pan_offset, (20.0, -10.0));
    }

    #[test]
    fn test_transform_round_trip() {
        let mut vp = ViewportContext::new(1000.0, 600.0);
        vp.zoom_by(1.5);
        vp.pan_by(33.0, -12.0);

        let layout = (140.0, 260.0);
        let back = vp.screen_to_layout(vp.layout_to_screen(layout));
        assert!((back.0 - layout.0).abs() < 1e-3);
        assert!((back.1 - layout.1).abs() < 1e-3);
    }

    #[test]
    fn test_hit_test_inside_and_outside() {
        let vp = ViewportContext::new(1000.0, 600.0);
        let config = LayoutConfig::default();
        let nodes = vec![node_at(0.0, 0.0), node_at(300.0, 0.0)];

        // Center of the first node's box, pushed through the forward
        // transform, must resolve back to it.
        let inside = vp.layout_to_screen((config.node_width / 2.0, config.node_height / 2.0));
        assert_eq!(vp.hit_test(&nodes, &config, inside), Some(nodes[0].member_id));

        let outside = vp.layout_to_screen((-500.0, -500.0));
        assert_eq!(vp.hit_test(&nodes, &config, outside), None);
    }

    #[test]
    fn test_hit_test_first_in_sequence_wins() {
        let vp = ViewportContext::new(1000.0, 600.0);
        let config = LayoutConfig::default();
        // Overlapping boxes: the positioned sequence decides.
        let nodes = vec![node_at(0.0, 0.0), node_at(10.0, 10.0)];
        let point = vp.layout_to_screen((20.0, 20.0));
        assert_eq!(vp.hit_test(&nodes, &config, point), Some(nodes[0].member_id));
    }

    #[test]
    fn test_visible_set_includes_margin() {
        let vp = ViewportContext::default();
        let config = LayoutConfig::default();
        let viewport = LayoutBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 400.0,
            max_y: 400.0,
        };
        // Margin is 2 * max(160, 60) = 320.
        let nodes = vec![
            node_at(100.0, 100.0),  // inside
            node_at(500.0, 0.0),    // outside rect, inside margin
            node_at(2000.0, 0.0),   // far outside
        ];

        let visible = vp.visible_set(&nodes, &config, viewport);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].member_id, nodes[0].member_id);
        assert_eq!(visible[1].member_id, nodes[1].member_id);
    }
}

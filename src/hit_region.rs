//! Clickable screen regions
//!
//! The registry is rebuilt from scratch every frame by the controller, so it
//! always matches what is on screen. Lookups walk regions in registration
//! order and stop at the first match.

use sdl2::rect::Rect;

/// What happens when a region is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionAction {
    /// Follow the current node's choice at this index
    Navigate(usize),
    /// Go back to the start node
    Restart,
    /// Leave the game
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub rect: Rect,
    pub action: RegionAction,
}

impl HitRegion {
    pub fn new(rect: Rect, action: RegionAction) -> Self {
        HitRegion { rect, action }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }
}

#[derive(Debug, Clone, Default)]
pub struct HitRegionRegistry {
    regions: Vec<HitRegion>,
}

impl HitRegionRegistry {
    pub fn new() -> Self {
        HitRegionRegistry {
            regions: Vec::new(),
        }
    }

    /// Drops every region from the previous frame
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, rect: Rect, action: RegionAction) {
        self.regions.push(HitRegion::new(rect, action));
    }

    /// First region (in registration order) containing the point
    pub fn hit_test(&self, x: i32, y: i32) -> Option<&HitRegion> {
        self.regions.iter().find(|region| region.contains(x, y))
    }

    /// Whether the point is over any region
    ///
    /// Uses the same containment test as [`hit_test`](Self::hit_test), so
    /// the cursor only changes shape where a click would land.
    pub fn is_hovering(&self, x: i32, y: i32) -> bool {
        self.hit_test(x, y).is_some()
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Number of choice regions this frame
    pub fn navigate_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|region| matches!(region.action, RegionAction::Navigate(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_inside_region() {
        let mut registry = HitRegionRegistry::new();
        registry.register(Rect::new(10, 10, 50, 20), RegionAction::Navigate(0));

        let hit = registry.hit_test(30, 20).unwrap();
        assert_eq!(hit.action, RegionAction::Navigate(0));
    }

    #[test]
    fn test_miss_outside_region() {
        let mut registry = HitRegionRegistry::new();
        registry.register(Rect::new(10, 10, 50, 20), RegionAction::Quit);

        assert!(registry.hit_test(5, 15).is_none());
        assert!(registry.hit_test(30, 31).is_none());
    }

    #[test]
    fn test_edges_half_open() {
        let mut registry = HitRegionRegistry::new();
        registry.register(Rect::new(0, 0, 10, 10), RegionAction::Quit);

        // Top-left corner is inside, bottom-right edge is not
        assert!(registry.hit_test(0, 0).is_some());
        assert!(registry.hit_test(9, 9).is_some());
        assert!(registry.hit_test(10, 5).is_none());
        assert!(registry.hit_test(5, 10).is_none());
    }

    #[test]
    fn test_overlap_first_registered_wins() {
        let mut registry = HitRegionRegistry::new();
        registry.register(Rect::new(0, 0, 100, 100), RegionAction::Navigate(1));
        registry.register(Rect::new(50, 50, 100, 100), RegionAction::Navigate(2));

        // Overlapping area resolves to the earlier region
        assert_eq!(registry.hit_test(75, 75).unwrap().action, RegionAction::Navigate(1));
        // Outside the first, inside the second
        assert_eq!(registry.hit_test(120, 120).unwrap().action, RegionAction::Navigate(2));
    }

    #[test]
    fn test_hover_matches_hit_test() {
        let mut registry = HitRegionRegistry::new();
        registry.register(Rect::new(100, 300, 200, 20), RegionAction::Navigate(0));

        // Points just below the region must not count as hovering either
        for (x, y) in [(150, 310), (150, 319), (150, 320), (150, 700), (99, 310)] {
            assert_eq!(registry.is_hovering(x, y), registry.hit_test(x, y).is_some());
        }
        assert!(!registry.is_hovering(150, 700));
    }

    #[test]
    fn test_clear_removes_stale_regions() {
        let mut registry = HitRegionRegistry::new();
        registry.register(Rect::new(0, 0, 10, 10), RegionAction::Restart);
        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.hit_test(5, 5).is_none());
    }

    #[test]
    fn test_navigate_count() {
        let mut registry = HitRegionRegistry::new();
        registry.register(Rect::new(0, 0, 10, 10), RegionAction::Quit);
        registry.register(Rect::new(0, 20, 10, 10), RegionAction::Navigate(0));
        registry.register(Rect::new(0, 40, 10, 10), RegionAction::Navigate(1));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.navigate_count(), 2);
    }
}

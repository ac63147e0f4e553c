// GameController: the per-frame cycle
//
// Frame order is layout → region rebuild → draw → input. The controller
// does the layout and region work in `prepare_frame`, the caller draws the
// returned `FrameLayout`, then `handle_pointer` resolves input against the
// regions that were just rebuilt, so a click always lands on what is on
// screen this frame.

use super::frame::{FrameLayout, PlacedText, END_MARKER, QUIT_LABEL, RESTART_LABEL};
use super::session::{Session, Transition};
use crate::assets::ImageId;
use crate::config::{GameConfig, LayoutConfig};
use crate::hit_region::{HitRegionRegistry, RegionAction};
use crate::input_system::{CursorShape, InputDispatcher, PointerState};
use crate::layout::{fit_image, wrap_text};
use crate::story::{NodeId, Story, StoryGraph};
use crate::text::{GlyphMetrics, TextBounds};
use sdl2::rect::Rect;
use std::time::Instant;

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Result of this frame's input step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub outcome: FrameOutcome,
    pub cursor: CursorShape,
}

pub struct GameController {
    graph: StoryGraph,
    session: Session,
    registry: HitRegionRegistry,
    dispatcher: InputDispatcher,
    layout: LayoutConfig,
    viewport_width: u32,
    viewport_height: u32,
}

impl GameController {
    pub fn new(story: Story, config: &GameConfig) -> Self {
        let session = Session::new(&story.graph, story.start);

        GameController {
            graph: story.graph,
            session,
            registry: HitRegionRegistry::new(),
            dispatcher: InputDispatcher::new(config.input.debounce()),
            layout: config.layout.clone(),
            viewport_width: config.window.width,
            viewport_height: config.window.height,
        }
    }

    /// Records a new viewport size; the next frame lays out against it
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    pub fn current_node(&self) -> NodeId {
        self.session.current()
    }

    pub fn start_node(&self) -> NodeId {
        self.session.start()
    }

    pub fn displayed_image(&self) -> Option<ImageId> {
        self.session.displayed_image()
    }

    pub fn is_ending(&self) -> bool {
        self.session.is_ending(&self.graph)
    }

    pub fn registry(&self) -> &HitRegionRegistry {
        &self.registry
    }

    /// Lays out the current node and rebuilds the hit regions
    ///
    /// Regions are registered in a fixed order: quit, then one per choice
    /// top to bottom, then restart on an ending.
    pub fn prepare_frame<M, S>(&mut self, metrics: &M, image_size: S) -> FrameLayout
    where
        M: GlyphMetrics,
        S: Fn(ImageId) -> Option<(u32, u32)>,
    {
        self.registry.clear();

        let width = self.viewport_width;
        let layout = &self.layout;
        let node = self.graph.node(self.session.current());
        let mut frame = FrameLayout::default();

        frame.image = self.session.displayed_image().and_then(|id| {
            let (w, h) = image_size(id)?;
            fit_image(w, h, width, layout.image_top, layout.image_band_height).map(|rect| (id, rect))
        });

        // 1. Quit, pinned to the top-right corner
        let quit_bounds = metrics.bounding_box(QUIT_LABEL);
        let quit = PlacedText::new(
            QUIT_LABEL,
            width as i32 - quit_bounds.width as i32 - layout.quit_margin,
            layout.quit_margin,
            quit_bounds,
        );
        self.registry
            .register(hit_band(&quit, layout.region_padding), RegionAction::Quit);
        frame.quit = Some(quit);

        // Story text
        let wrap_width = width.saturating_sub(layout.text_side_padding);
        let lines = wrap_text(&node.text, |s| metrics.measure(s), wrap_width);
        let mut y = layout.text_top;
        for line in lines {
            let bounds = metrics.bounding_box(&line);
            frame.lines.push(PlacedText::new(line, centred_x(width, bounds), y, bounds));
            y += layout.line_height;
        }

        // 2. Choices below the text
        let choice_top = y + layout.choice_gap;
        for (index, choice) in node.choices.iter().enumerate() {
            let label = choice.composed_label();
            let bounds = metrics.bounding_box(&label);
            let placed = PlacedText::new(
                label,
                centred_x(width, bounds),
                choice_top + index as i32 * layout.choice_spacing,
                bounds,
            );
            self.registry.register(
                hit_band(&placed, layout.region_padding),
                RegionAction::Navigate(index),
            );
            frame.choices.push(placed);
        }

        // 3. Ending marker and restart
        if node.is_terminal() {
            frame.end_marker = Some(PlacedText::new(
                END_MARKER,
                layout.end_marker_x,
                layout.end_marker_y,
                metrics.bounding_box(END_MARKER),
            ));

            let restart = PlacedText::new(
                RESTART_LABEL,
                layout.end_marker_x,
                layout.end_marker_y + layout.restart_gap,
                metrics.bounding_box(RESTART_LABEL),
            );
            self.registry
                .register(hit_band(&restart, layout.region_padding), RegionAction::Restart);
            frame.restart = Some(restart);
        }

        frame
    }

    /// Runs this frame's pointer sample through the dispatcher
    pub fn handle_pointer(&mut self, pointer: PointerState, now: Instant) -> FrameInput {
        let result = self.dispatcher.dispatch(pointer, now, &self.registry);

        let outcome = match result.action {
            Some(action) => match self.session.apply(action, &self.graph) {
                Transition::Quit => FrameOutcome::Quit,
                Transition::Moved(_) | Transition::Restarted | Transition::Ignored => {
                    FrameOutcome::Continue
                }
            },
            None => FrameOutcome::Continue,
        };

        FrameInput {
            outcome,
            cursor: result.cursor(),
        }
    }
}

/// Left edge that centres `bounds` in a viewport (negative if it overflows)
fn centred_x(viewport_width: u32, bounds: TextBounds) -> i32 {
    (viewport_width as i32 - bounds.width as i32) / 2
}

/// Clickable band around a label: its ink box grown vertically by `padding`
fn hit_band(text: &PlacedText, padding: u32) -> Rect {
    let ink = text.ink_rect();
    Rect::new(
        ink.x(),
        ink.y() - padding as i32,
        ink.width(),
        ink.height() + 2 * padding,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageManifest;
    use crate::story::build_story;
    use crate::text::BitmapFont;
    use std::time::Duration;

    fn font() -> BitmapFont {
        BitmapFont::new(2)
    }

    fn any_size(_: ImageId) -> Option<(u32, u32)> {
        Some((320, 240))
    }

    /// start (image 0) -> look (no image) -> hill (image 1) -> end
    fn small_story() -> Story {
        let mut graph = StoryGraph::new();
        let start = graph.add_node("You stand on the docks.", Some(ImageId(0)));
        let look = graph.add_node("A guide watches you.", None);
        let hill = graph.add_node("Trees line the shore.", Some(ImageId(1)));
        let end = graph.add_node("The cycle begins again.", None);
        graph.add_choice(start, "Look around", "Find a guide", look).unwrap();
        graph.add_choice(look, "Yes", "Go with him", hill).unwrap();
        graph.add_choice(look, "No", "Turn away", start).unwrap();
        graph.add_choice(hill, "Farewell", "Wave", end).unwrap();
        Story { graph, start }
    }

    fn controller() -> GameController {
        GameController::new(small_story(), &GameConfig::default())
    }

    fn centre(rect: Rect) -> (i32, i32) {
        (rect.x() + rect.width() as i32 / 2, rect.y() + rect.height() as i32 / 2)
    }

    fn region_for(controller: &GameController, action: RegionAction) -> Rect {
        controller
            .registry()
            .regions()
            .iter()
            .find(|region| region.action == action)
            .map(|region| region.rect)
            .unwrap()
    }

    /// Press then release at (x, y), 10ms apart, starting at `at`
    fn click(controller: &mut GameController, (x, y): (i32, i32), at: Instant) -> FrameInput {
        controller.handle_pointer(PointerState::new(x, y, true), at);
        controller.handle_pointer(PointerState::new(x, y, false), at + Duration::from_millis(10))
    }

    #[test]
    fn test_region_order_quit_then_choices() {
        let mut controller = controller();
        let look = controller.graph().choice_target(controller.current_node(), 0).unwrap();
        controller.session.apply(RegionAction::Navigate(0), &controller.graph);
        assert_eq!(controller.current_node(), look);

        controller.prepare_frame(&font(), any_size);
        let actions: Vec<RegionAction> =
            controller.registry().regions().iter().map(|r| r.action).collect();

        assert_eq!(
            actions,
            vec![RegionAction::Quit, RegionAction::Navigate(0), RegionAction::Navigate(1)]
        );
    }

    #[test]
    fn test_choices_stack_below_text() {
        let mut controller = controller();
        let frame = controller.prepare_frame(&font(), any_size);

        let last_line = frame.lines.last().unwrap();
        let first_choice = &frame.choices[0];
        assert!(first_choice.y > last_line.y);
        assert_eq!(first_choice.text, "Look around: Find a guide");
    }

    #[test]
    fn test_choice_regions_contain_glyphs() {
        let mut controller = controller();
        let frame = controller.prepare_frame(&font(), any_size);

        for (index, placed) in frame.choices.iter().enumerate() {
            let band = region_for(&controller, RegionAction::Navigate(index));
            let ink = placed.ink_rect();
            assert!(band.left() <= ink.left() && band.right() >= ink.right());
            assert!(band.top() < ink.top() && band.bottom() > ink.bottom());
        }
    }

    #[test]
    fn test_lines_centred_independently() {
        let mut controller = controller();
        controller.resize(200, 480);
        let frame = controller.prepare_frame(&font(), any_size);

        assert!(frame.lines.len() > 1);
        for line in &frame.lines {
            let left = line.x;
            let right = 200 - (line.x + line.bounds.width as i32);
            assert!((left - right).abs() <= 1, "line {:?}", line.text);
        }
    }

    #[test]
    fn test_click_choice_moves_and_clears_image() {
        let mut controller = controller();
        let start = controller.current_node();
        assert_eq!(controller.displayed_image(), Some(ImageId(0)));

        controller.prepare_frame(&font(), any_size);
        let target = centre(region_for(&controller, RegionAction::Navigate(0)));
        let input = click(&mut controller, target, Instant::now());

        assert_eq!(input.outcome, FrameOutcome::Continue);
        assert_eq!(controller.current_node(), controller.graph().choice_target(start, 0).unwrap());
        assert_eq!(controller.displayed_image(), None);
    }

    #[test]
    fn test_click_shows_target_image() {
        let mut controller = controller();
        let t0 = Instant::now();

        controller.prepare_frame(&font(), any_size);
        let first = centre(region_for(&controller, RegionAction::Navigate(0)));
        click(&mut controller, first, t0);

        controller.prepare_frame(&font(), any_size);
        let yes = centre(region_for(&controller, RegionAction::Navigate(0)));
        click(&mut controller, yes, t0 + Duration::from_millis(300));

        assert_eq!(controller.displayed_image(), Some(ImageId(1)));
    }

    #[test]
    fn test_ending_has_only_restart() {
        let mut controller = controller();
        let mut at = Instant::now();

        // Always take the first choice until the ending
        while !controller.is_ending() {
            controller.prepare_frame(&font(), any_size);
            let choice = centre(region_for(&controller, RegionAction::Navigate(0)));
            click(&mut controller, choice, at);
            at += Duration::from_millis(250);
        }

        let frame = controller.prepare_frame(&font(), any_size);
        assert!(frame.is_ending());
        assert!(frame.choices.is_empty());
        assert_eq!(controller.registry().navigate_count(), 0);

        let actions: Vec<RegionAction> =
            controller.registry().regions().iter().map(|r| r.action).collect();
        assert_eq!(actions, vec![RegionAction::Quit, RegionAction::Restart]);

        let restart = centre(region_for(&controller, RegionAction::Restart));
        click(&mut controller, restart, at);

        assert_eq!(controller.current_node(), controller.start_node());
        assert_eq!(controller.displayed_image(), Some(ImageId(0)));
    }

    #[test]
    fn test_quick_second_click_dropped() {
        let mut controller = controller();
        let t0 = Instant::now();

        controller.prepare_frame(&font(), any_size);
        let first = centre(region_for(&controller, RegionAction::Navigate(0)));
        click(&mut controller, first, t0);
        let look = controller.current_node();

        // "No" leads back to start, but the click comes 30ms later
        controller.prepare_frame(&font(), any_size);
        let no = centre(region_for(&controller, RegionAction::Navigate(1)));
        click(&mut controller, no, t0 + Duration::from_millis(30));

        assert_eq!(controller.current_node(), look);
    }

    #[test]
    fn test_quit_click() {
        let mut controller = controller();
        controller.prepare_frame(&font(), any_size);

        let quit = centre(region_for(&controller, RegionAction::Quit));
        let input = click(&mut controller, quit, Instant::now());

        assert_eq!(input.outcome, FrameOutcome::Quit);
    }

    #[test]
    fn test_hover_sets_pointer_cursor() {
        let mut controller = controller();
        controller.prepare_frame(&font(), any_size);
        let (x, y) = centre(region_for(&controller, RegionAction::Navigate(0)));

        let over = controller.handle_pointer(PointerState::new(x, y, false), Instant::now());
        let away = controller.handle_pointer(PointerState::new(1, 470, false), Instant::now());

        assert_eq!(over.cursor, CursorShape::Pointer);
        assert_eq!(away.cursor, CursorShape::Default);
    }

    #[test]
    fn test_resize_moves_quit_button() {
        let mut controller = controller();
        let narrow = controller.prepare_frame(&font(), any_size).quit.unwrap();

        controller.resize(1024, 768);
        assert_eq!(controller.viewport(), (1024, 768));
        let wide = controller.prepare_frame(&font(), any_size).quit.unwrap();

        assert_eq!(wide.x - narrow.x, 1024 - 640);
    }

    #[test]
    fn test_image_fitted_to_band() {
        let mut controller = controller();
        let frame = controller.prepare_frame(&font(), |_| Some((1280, 480)));

        let (id, rect) = frame.image.unwrap();
        assert_eq!(id, ImageId(0));
        // Both ratios are 0.5, so the image fills the band exactly
        assert_eq!(rect, Rect::new(0, 40, 640, 240));
    }

    #[test]
    fn test_unknown_image_size_skips_image() {
        let mut controller = controller();
        let frame = controller.prepare_frame(&font(), |_| None);
        assert!(frame.image.is_none());
    }

    #[test]
    fn test_builtin_story_look_around() {
        let mut manifest = ImageManifest::new("assets");
        let story = build_story(&mut manifest).unwrap();
        let mut controller = GameController::new(story, &GameConfig::default());

        let frame = controller.prepare_frame(&font(), any_size);
        assert_eq!(frame.choices.len(), 1);
        assert!(frame.choices[0].text.starts_with("Look around"));

        let target = centre(region_for(&controller, RegionAction::Navigate(0)));
        click(&mut controller, target, Instant::now());

        let look = controller.current_node();
        assert_ne!(look, controller.start_node());
        assert_eq!(controller.displayed_image(), controller.graph().node(look).image);
        assert_eq!(controller.displayed_image(), None);
    }
}

use crate::config::SelectorConfig;
use crate::geometry::{self, Placement, Point, Viewport};
use crate::input::{self, NavDirection};
use crate::item::Roster;
use crate::motion::{self, FrameProgress};
use crate::pointer;
use crate::selection;
use crate::state::{Phase, WheelState};
use crate::{Result, ToolWheelError};

/// A complete selector instance: roster, tuning and wheel state.
///
/// Every method runs synchronously on the caller's thread; the host's
/// single event queue interleaves input handlers with the per-frame tick,
/// so there is never more than one writer. The engine owns no timer or
/// callback: the host drives [`WheelSelector::tick`] and simply drops the
/// selector at teardown, which releases everything.
#[derive(Debug, Clone)]
pub struct WheelSelector {
    roster: Roster,
    config: SelectorConfig,
    state: WheelState,
}

impl WheelSelector {
    /// Builds a selector after validating the tuning against the roster.
    /// The selection bias must stay under half a step, otherwise the wheel
    /// could come to rest on a rotation that derives a neighbouring index.
    pub fn new(roster: Roster, config: SelectorConfig) -> Result<Self> {
        config.validate()?;
        if let Some(step) = roster.step_angle() {
            if config.selection_bias.abs() >= step / 2.0 {
                return Err(ToolWheelError::invalid_config(format!(
                    "selection_bias {} must stay under half a step ({} degrees)",
                    config.selection_bias,
                    step / 2.0
                )));
            }
        }
        Ok(Self {
            roster,
            config,
            state: WheelState::new(),
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn rotation(&self) -> f64 {
        self.state.rotation_degrees
    }

    pub fn velocity(&self) -> f64 {
        self.state.angular_velocity
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Index of the item nearest the top of the wheel. Re-derived from the
    /// rotation on every call, never cached.
    pub fn current_index(&self) -> usize {
        selection::selected_index(
            self.state.rotation_degrees,
            self.roster.len(),
            self.config.selection_bias,
        )
    }

    /// True when the previous-item affordance should be disabled.
    pub fn at_first_boundary(&self) -> bool {
        self.current_index() == 0
    }

    /// True when the next-item affordance should be disabled.
    pub fn at_last_boundary(&self) -> bool {
        self.current_index() == self.roster.last_index()
    }

    /// Pointer down with screen coordinates. The circle center is read live
    /// from the container on every event, never cached across a drag.
    pub fn pointer_down(&mut self, pointer: Point, center: Point, now_ms: f64) {
        if !self.roster.is_interactive() {
            return;
        }
        pointer::press(&mut self.state, pointer, center, now_ms);
    }

    /// Pointer move; only meaningful while a drag is in progress.
    pub fn pointer_move(&mut self, pointer: Point, center: Point, now_ms: f64) {
        if !self.roster.is_interactive() {
            return;
        }
        let current = self.current_index();
        pointer::drag(
            &mut self.state,
            pointer,
            center,
            now_ms,
            current,
            self.roster.last_index(),
            self.config.motion.drag_gain,
        );
    }

    /// Pointer up or pointer leaving the container; both read as a release.
    pub fn pointer_up(&mut self, now_ms: f64) {
        pointer::release(&mut self.state, now_ms);
    }

    /// One discrete step. Returns whether the wheel moved.
    pub fn step(&mut self, direction: NavDirection, now_ms: f64) -> bool {
        let current = self.current_index();
        input::step(
            &mut self.state,
            direction,
            current,
            self.roster.last_index(),
            self.roster.step_angle(),
            now_ms,
        )
    }

    pub fn step_previous(&mut self, now_ms: f64) -> bool {
        self.step(NavDirection::Previous, now_ms)
    }

    pub fn step_next(&mut self, now_ms: f64) -> bool {
        self.step(NavDirection::Next, now_ms)
    }

    /// Wheel scroll; the sign picks the direction.
    pub fn scroll(&mut self, delta_y: f64, now_ms: f64) -> bool {
        input::direction_for_scroll(delta_y)
            .map(|direction| self.step(direction, now_ms))
            .unwrap_or(false)
    }

    /// Keyboard navigation by key code.
    pub fn key(&mut self, key: &str, now_ms: f64) -> bool {
        input::direction_for_key(key)
            .map(|direction| self.step(direction, now_ms))
            .unwrap_or(false)
    }

    /// Item click: rotates the clicked item straight to the top.
    pub fn activate(&mut self, index: usize, now_ms: f64) -> bool {
        input::activate(
            &mut self.state,
            index,
            self.roster.len(),
            self.roster.step_angle(),
            now_ms,
        )
    }

    /// Advances the wheel by one frame while not dragging.
    pub fn tick(&mut self, now_ms: f64) -> FrameProgress {
        let current = self.current_index();
        motion::advance_frame(
            &mut self.state,
            current,
            self.roster.step_angle(),
            &self.config.motion,
            now_ms,
        )
    }

    /// Placement of every item for the presentation layer, computed against
    /// the viewport as it is right now. A roster of one renders its single
    /// item resting at the top; an empty roster renders nothing.
    pub fn placements(&self, viewport: &Viewport) -> Vec<Placement> {
        let step = self.roster.step_angle().unwrap_or(0.0);
        let active = self.current_index();
        (0..self.roster.len())
            .map(|index| {
                let mut placement =
                    geometry::place_item(index, step, self.state.rotation_degrees, viewport);
                placement.is_active = index == active;
                placement
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    fn selector() -> WheelSelector {
        WheelSelector::new(Roster::default_tools(), SelectorConfig::default()).unwrap()
    }

    fn on_circle(degrees: f64) -> Point {
        let radians = degrees.to_radians();
        Point::new(radians.cos() * 300.0, radians.sin() * 300.0)
    }

    #[test]
    fn rejects_a_bias_wider_than_half_a_step() {
        let mut config = SelectorConfig::default();
        config.selection_bias = 30.0;
        let err = WheelSelector::new(Roster::default_tools(), config).unwrap_err();
        assert!(format!("{err}").contains("selection_bias"));
    }

    #[test]
    fn drag_past_the_first_item_is_absorbed() {
        let mut selector = selector();
        let center = Point::default();
        selector.pointer_down(on_circle(0.0), center, 0.0);
        let before = selector.rotation();
        selector.pointer_move(on_circle(10.0), center, FRAME_MS);

        assert_eq!(selector.rotation(), before);
        assert_eq!(selector.velocity(), 0.0);
        assert_eq!(selector.current_index(), 0);
        assert!(selector.at_first_boundary());
    }

    #[test]
    fn released_drag_coasts_snaps_and_comes_to_exact_rest() {
        let mut selector = selector();
        let center = Point::default();
        let step = selector.roster().step_angle().unwrap();

        selector.pointer_down(on_circle(0.0), center, 0.0);
        selector.pointer_move(on_circle(-20.0), center, FRAME_MS);
        selector.pointer_up(2.0 * FRAME_MS);
        assert_eq!(selector.phase(), Phase::Coasting);

        let mut saw_coasting = false;
        let mut saw_snapping = false;
        for frame in 3..400 {
            match selector.tick(frame as f64 * FRAME_MS) {
                FrameProgress::Coasting => saw_coasting = true,
                FrameProgress::Snapping => saw_snapping = true,
                _ => {}
            }
        }

        assert!(saw_coasting);
        assert!(saw_snapping);
        assert_eq!(selector.current_index(), 3);
        assert_eq!(selector.rotation(), selection::resting_rotation(3, step));
        assert_eq!(selector.velocity(), 0.0);
        assert_eq!(selector.phase(), Phase::Idle);
    }

    #[test]
    fn new_pointer_down_discards_inflight_coasting() {
        let mut selector = selector();
        let center = Point::default();
        selector.pointer_down(on_circle(0.0), center, 0.0);
        selector.pointer_move(on_circle(-15.0), center, FRAME_MS);
        selector.pointer_up(2.0 * FRAME_MS);
        assert!(selector.velocity().abs() > 0.0);

        selector.pointer_down(on_circle(-15.0), center, 3.0 * FRAME_MS);
        assert_eq!(selector.velocity(), 0.0);
        assert!(selector.state().is_dragging());
    }

    #[test]
    fn stepping_walks_the_roster_and_stops_at_the_ends() {
        let mut selector = selector();
        let step = selector.roster().step_angle().unwrap();

        assert!(!selector.step_previous(1.0));

        for expected in 1..=6 {
            assert!(selector.step_next(expected as f64));
            assert_eq!(selector.current_index(), expected);
            assert_eq!(
                selector.rotation(),
                selection::resting_rotation(expected, step)
            );
            assert_eq!(selector.velocity(), 0.0);
        }

        assert!(selector.at_last_boundary());
        let resting = selector.rotation();
        assert!(!selector.step_next(100.0));
        assert_eq!(selector.rotation(), resting);
        assert_eq!(selector.current_index(), 6);
    }

    #[test]
    fn scroll_and_keys_share_the_step_semantics() {
        let mut selector = selector();
        assert!(selector.scroll(5.0, 1.0));
        assert_eq!(selector.current_index(), 1);
        assert!(selector.key("ArrowLeft", 2.0));
        assert_eq!(selector.current_index(), 0);
        assert!(!selector.key("Escape", 3.0));
        assert!(!selector.scroll(0.0, 4.0));
    }

    #[test]
    fn activation_interrupts_motion_with_the_exact_resting_angle() {
        let mut selector = selector();
        let step = selector.roster().step_angle().unwrap();
        assert!(selector.activate(3, 5.0));
        assert_eq!(selector.rotation(), selection::resting_rotation(3, step));
        assert_eq!(selector.current_index(), 3);
        assert_eq!(selector.phase(), Phase::Idle);
    }

    #[test]
    fn placements_flag_exactly_one_active_item() {
        let selector = selector();
        let viewport = Viewport::new(Point::new(400.0, 600.0), 300.0);
        let placements = selector.placements(&viewport);
        assert_eq!(placements.len(), 7);
        assert_eq!(placements.iter().filter(|p| p.is_active).count(), 1);
        assert!(placements[0].is_active);
    }

    #[test]
    fn tiny_rosters_render_but_ignore_every_input() {
        let mut selector =
            WheelSelector::new(Roster::new(vec![crate::item::Item::new("solo", "#fff")]),
                SelectorConfig::default())
            .unwrap();
        let center = Point::default();

        selector.pointer_down(on_circle(0.0), center, 0.0);
        selector.pointer_move(on_circle(30.0), center, FRAME_MS);
        assert!(!selector.step_next(1.0));
        assert!(!selector.activate(0, 2.0));
        assert_eq!(selector.tick(3.0), FrameProgress::Settled);
        assert_eq!(selector.rotation(), 0.0);

        let viewport = Viewport::new(Point::new(400.0, 600.0), 300.0);
        let placements = selector.placements(&viewport);
        assert_eq!(placements.len(), 1);
        assert!((placements[0].y - 300.0).abs() < 1e-9);

        let empty = WheelSelector::new(Roster::default(), SelectorConfig::default()).unwrap();
        assert!(empty.placements(&viewport).is_empty());
        assert_eq!(empty.current_index(), 0);
    }
}

//! Core data model for the weigh-scale game.
//! Items, the weighing round and the reducer that drives both from pointer,
//! timer and answer events. Nothing here touches the DOM.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::Reducible;

use crate::config::{GameConfig, TimingConfig};
use crate::state::{
    clamp_to_container, is_over, judge, parse_answer, plate_anchor, AnswerError, DragState,
    ScaleState, Verdict,
};
use crate::util::{clog, format_weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

/// Opaque artwork reference; only the views turn it into a URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetHandle(String);

impl AssetHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub(crate) fn path(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn left(&self) -> f64 {
        self.x
    }
    pub fn top(&self) -> f64 {
        self.y
    }
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Page-space rectangles of the play area and the scale, measured per event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub container: Rect,
    pub scale: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub weight: f64,
    pub asset: AssetHandle,
    /// Top-left corner, container-local.
    pub position: Point,
    pub home: Point,
    pub anchor_nudge: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub item_id: ItemId,
    pub weight: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Settling,
    AwaitingAnswer,
}

/// Identifies one drop-on-scale; timers carry it so late ones can be told apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Round(pub u32);

impl Round {
    fn next(self) -> Self {
        Round(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeighingSession {
    /// Active item and its reading; both present or both absent.
    pub measurement: Option<Measurement>,
    pub phase: Phase,
    pub round: Round,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: Rc<GameConfig>,
    pub items: Vec<Item>,
    pub drag: DragState,
    pub scale: ScaleState,
    pub session: WeighingSession,
    /// Items guessed correctly at least once this page session.
    pub weighed: BTreeSet<ItemId>,
    pub last_verdict: Option<Verdict>,
    /// Bumped on every judged answer so views can react to repeats.
    pub verdict_seq: u64,
    /// Bumped whenever a round's physical reset fires.
    pub resets: u64,
}

impl GameState {
    pub fn new(config: Rc<GameConfig>) -> Self {
        let layout = config.layout;
        let items = config
            .items
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let home = clamp_to_container(
                    Point::new(layout.start_x + i as f64 * layout.spacing, layout.row_y),
                    layout.container_width,
                    layout.container_height,
                    layout.item_size,
                );
                Item {
                    id: spec.id,
                    name: spec.name.clone(),
                    weight: spec.weight,
                    asset: spec.asset.clone(),
                    position: home,
                    home,
                    anchor_nudge: spec.anchor_nudge,
                }
            })
            .collect();
        Self {
            config,
            items,
            drag: DragState::default(),
            scale: ScaleState::default(),
            session: WeighingSession::default(),
            weighed: BTreeSet::new(),
            last_verdict: None,
            verdict_seq: 0,
            resets: 0,
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_weighed(&self, id: ItemId) -> bool {
        self.weighed.contains(&id)
    }

    pub fn measured_weight(&self) -> Option<f64> {
        self.session.measurement.map(|m| m.weight)
    }

    pub fn active_item(&self) -> Option<ItemId> {
        self.session.measurement.map(|m| m.item_id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    fn send_home(&mut self) {
        for it in &mut self.items {
            it.position = it.home;
        }
    }

    /// Drop-on-scale transition: new round, reading, snap, plate dip.
    fn begin_round(&mut self, id: ItemId, geo: &Geometry) {
        let layout = self.config.layout;
        let pointer = self.config.pointer;
        let Some(item) = self.item_mut(id) else { return };
        item.position = plate_anchor(geo, layout.item_size, layout.plate_offset, item.anchor_nudge);
        let weight = item.weight;
        self.scale.load(id, weight, &pointer);
        self.session.round = self.session.round.next();
        self.session.measurement = Some(Measurement { item_id: id, weight });
        self.session.phase = Phase::Settling;
        clog(&format!(
            "round {}: item {} reads {} (angle {})",
            self.session.round.0,
            id.0,
            format_weight(weight),
            self.scale.pointer_angle
        ));
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    /// Pointer pressed on an item; `pointer` is in page coordinates.
    DragStart {
        id: ItemId,
        pointer: Point,
        geometry: Option<Geometry>,
    },
    DragMove {
        pointer: Point,
        geometry: Option<Geometry>,
    },
    DragEnd { geometry: Option<Geometry> },
    /// Plate dip finished for `round`.
    SettleElapsed { round: Round },
    /// Items go home and the pointer drops back for `round`.
    ResetElapsed { round: Round },
    Submit { raw: String },
}

/// Timed edges of `round` as (delay after the drop in ms, action).
/// The reset waits for the settle to finish first.
pub fn round_schedule(timing: TimingConfig, round: Round) -> [(u32, GameAction); 2] {
    [
        (timing.settle_ms, GameAction::SettleElapsed { round }),
        (
            timing.settle_ms.saturating_add(timing.reset_ms),
            GameAction::ResetElapsed { round },
        ),
    ]
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            DragStart { id, pointer, geometry } => {
                let Some(geo) = geometry else { return self };
                let Some(item) = new.item(id) else { return self };
                let offset = Point::new(
                    pointer.x - geo.container.left() - item.position.x,
                    pointer.y - geo.container.top() - item.position.y,
                );
                new.drag.grab(id, offset);
                clog(&format!("grab item {}", id.0));
            }
            DragMove { pointer, geometry } => {
                let Some(id) = new.drag.dragged else { return self };
                let Some(geo) = geometry else { return self };
                let size = new.config.layout.item_size;
                let offset = new.drag.grab_offset;
                let Some(item) = new.item_mut(id) else { return self };
                item.position = clamp_to_container(
                    Point::new(
                        pointer.x - geo.container.left() - offset.x,
                        pointer.y - geo.container.top() - offset.y,
                    ),
                    geo.container.width,
                    geo.container.height,
                    size,
                );
            }
            DragEnd { geometry } => {
                let Some(id) = new.drag.release() else { return self };
                let Some(geo) = geometry else {
                    clog("drop without layout; ignored");
                    return Rc::new(new);
                };
                let Some(item) = new.item(id) else { return Rc::new(new) };
                let half = new.config.layout.item_size / 2.0;
                let center = Point::new(
                    geo.container.left() + item.position.x + half,
                    geo.container.top() + item.position.y + half,
                );
                if is_over(&geo.scale, center) {
                    new.begin_round(id, &geo);
                } else {
                    clog(&format!("item {} dropped off the scale", id.0));
                }
            }
            SettleElapsed { round } => {
                if round != new.session.round {
                    clog(&format!("stale settle for round {}", round.0));
                    return self;
                }
                new.scale.settle();
                if new.session.phase == Phase::Settling {
                    new.session.phase = if new.session.measurement.is_some() {
                        Phase::AwaitingAnswer
                    } else {
                        Phase::Idle
                    };
                }
            }
            ResetElapsed { round } => {
                if round != new.session.round {
                    clog(&format!("stale reset for round {}", round.0));
                    return self;
                }
                new.send_home();
                new.scale.clear();
                if new.session.phase == Phase::Settling && new.session.measurement.is_some() {
                    new.session.phase = Phase::AwaitingAnswer;
                }
                new.resets += 1;
                clog(&format!("round {} reset", round.0));
            }
            Submit { raw } => {
                let guess = parse_answer(&raw);
                if guess == Err(AnswerError::Empty) {
                    return self;
                }
                let verdict = judge(new.session.measurement, guess, new.config.answer_tolerance);
                if let Verdict::Correct { item_id, .. } = verdict {
                    new.weighed.insert(item_id);
                }
                clog(&format!("answer {:?} -> {:?}", raw.trim(), verdict));
                new.session.measurement = None;
                new.session.phase = Phase::Idle;
                new.last_verdict = Some(verdict);
                new.verdict_seq += 1;
            }
        }
        Rc::new(new)
    }
}

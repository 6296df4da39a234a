use crate::logic::collision::overlaps;
use crate::logic::transform::ViewTransform;
use crate::models::config::{GardenConfig, MIN_TERRAIN_M};
use crate::models::plot::{Bounds, Plot, PlotId};
use crate::models::{MeterPoint, PxPoint};

/// Smallest plot side a resize drag can produce.
pub const MIN_PLOT_SIZE_M: f64 = 0.2;
/// Moves snap to centimetre precision.
pub const MOVE_GRID_M: f64 = 0.01;
/// Rotation snaps to this step unless the precision modifier is held.
pub const ROTATION_SNAP_DEG: f64 = 5.0;
/// A rubber-band smaller than this in either axis is a click, not a selection.
pub const SELECTION_MIN_M: f64 = 0.1;

/// Everything the editor mutates: the live layout, the garden configuration
/// and the pan/zoom view. Persistence of `plots` and `config` is the caller's
/// concern; `view` is ephemeral.
#[derive(Debug, Clone)]
pub struct GardenState {
    pub plots: Vec<Plot>,
    pub config: GardenConfig,
    pub view: ViewTransform,
}

impl GardenState {
    pub fn new(plots: Vec<Plot>, config: GardenConfig) -> Self {
        Self {
            plots,
            config,
            view: ViewTransform::default(),
        }
    }

    pub fn plot_mut(&mut self, id: PlotId) -> Option<&mut Plot> {
        self.plots.iter_mut().find(|p| p.id == id)
    }

    pub fn plot(&self, id: PlotId) -> Option<&Plot> {
        self.plots.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pan,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainHandle {
    Right,
    Bottom,
    Corner,
}

/// What the pointer went down on, as resolved by the caller's hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas.
    Canvas,
    /// The calibration background image.
    Background,
    Plot(PlotId),
    ResizeHandle(PlotId),
    RotateHandle(PlotId),
    TerrainHandle(TerrainHandle),
}

/// The single active pointer operation. Every non-idle variant carries the
/// snapshot taken at pointer-down; each pointer-move recomputes the target
/// state from that snapshot and the current pointer, so repeated events are
/// idempotent and drift-free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Idle,
    PanningView {
        start_pointer: PxPoint,
        start_view: PxPoint,
    },
    MovingPlot {
        plot_id: PlotId,
        /// Pointer position minus plot origin at pointer-down, in metres.
        grab_offset: MeterPoint,
    },
    ResizingPlot {
        plot_id: PlotId,
        start_pointer: MeterPoint,
        start_width: f64,
        start_height: f64,
    },
    RotatingPlot {
        plot_id: PlotId,
        center: MeterPoint,
        /// Angle of center→pointer at pointer-down, degrees.
        start_angle: f64,
        start_rotation: f64,
    },
    MovingBackground {
        start_pointer: PxPoint,
        start_offset: PxPoint,
    },
    DrawingSelectionBox {
        start: MeterPoint,
        current: MeterPoint,
    },
    ResizingTerrain {
        handle: TerrainHandle,
        start_pointer: MeterPoint,
        start_width: f64,
        start_height: f64,
    },
}

/// Pointer state machine for the map editor. One operation is live at a time;
/// pointer-up always returns to `Idle`, wherever the pointer is released —
/// the hosting layer keeps move/up listeners global for exactly that reason.
#[derive(Debug, Clone)]
pub struct EditorController {
    pub tool: Tool,
    operation: Operation,
    pub selection: Vec<PlotId>,
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new(Tool::Select)
    }
}

impl EditorController {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            operation: Operation::Idle,
            selection: Vec::new(),
        }
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn is_idle(&self) -> bool {
        self.operation == Operation::Idle
    }

    /// Starts an operation for the hit target. Ignored unless idle: a stale
    /// pointer-down while an operation is live must not clobber its snapshot.
    pub fn pointer_down(&mut self, state: &GardenState, target: HitTarget, pointer: PxPoint) {
        if !self.is_idle() {
            return;
        }
        let pointer_m = state.view.screen_to_meters(pointer);

        self.operation = match (self.tool, target) {
            (Tool::Pan, HitTarget::TerrainHandle(handle))
            | (Tool::Select, HitTarget::TerrainHandle(handle)) => Operation::ResizingTerrain {
                handle,
                start_pointer: pointer_m,
                start_width: state.config.terrain_width,
                start_height: state.config.terrain_height,
            },
            (Tool::Pan, _) => Operation::PanningView {
                start_pointer: pointer,
                start_view: PxPoint::new(state.view.x, state.view.y),
            },
            (Tool::Select, HitTarget::Plot(plot_id)) => match state.plot(plot_id) {
                Some(plot) => Operation::MovingPlot {
                    plot_id,
                    grab_offset: MeterPoint::new(pointer_m.x - plot.x, pointer_m.y - plot.y),
                },
                None => Operation::Idle,
            },
            (Tool::Select, HitTarget::ResizeHandle(plot_id)) => match state.plot(plot_id) {
                Some(plot) => Operation::ResizingPlot {
                    plot_id,
                    start_pointer: pointer_m,
                    start_width: plot.width,
                    start_height: plot.height,
                },
                None => Operation::Idle,
            },
            (Tool::Select, HitTarget::RotateHandle(plot_id)) => match state.plot(plot_id) {
                Some(plot) => {
                    let (cx, cy) = plot.center();
                    Operation::RotatingPlot {
                        plot_id,
                        center: MeterPoint::new(cx, cy),
                        start_angle: angle_deg(cx, cy, pointer_m),
                        start_rotation: plot.rotation,
                    }
                }
                None => Operation::Idle,
            },
            (Tool::Select, HitTarget::Background) => Operation::MovingBackground {
                start_pointer: pointer,
                start_offset: PxPoint::new(state.config.background.x, state.config.background.y),
            },
            (Tool::Select, HitTarget::Canvas) => Operation::DrawingSelectionBox {
                start: pointer_m,
                current: pointer_m,
            },
        };
    }

    /// Applies the live operation for the current pointer position. `precise`
    /// is the rotation precision modifier (no 5° snap while held).
    pub fn pointer_move(&mut self, state: &mut GardenState, pointer: PxPoint, precise: bool) {
        match self.operation {
            Operation::Idle => {}
            Operation::PanningView {
                start_pointer,
                start_view,
            } => {
                state.view.x = start_view.x + (pointer.x - start_pointer.x);
                state.view.y = start_view.y + (pointer.y - start_pointer.y);
            }
            Operation::MovingPlot {
                plot_id,
                grab_offset,
            } => {
                let pointer_m = state.view.screen_to_meters(pointer);
                if let Some(plot) = state.plot_mut(plot_id) {
                    plot.x = snap(pointer_m.x - grab_offset.x, MOVE_GRID_M);
                    plot.y = snap(pointer_m.y - grab_offset.y, MOVE_GRID_M);
                }
            }
            Operation::ResizingPlot {
                plot_id,
                start_pointer,
                start_width,
                start_height,
            } => {
                let pointer_m = state.view.screen_to_meters(pointer);
                if let Some(plot) = state.plot_mut(plot_id) {
                    plot.width = (start_width + pointer_m.x - start_pointer.x).max(MIN_PLOT_SIZE_M);
                    plot.height =
                        (start_height + pointer_m.y - start_pointer.y).max(MIN_PLOT_SIZE_M);
                }
            }
            Operation::RotatingPlot {
                plot_id,
                center,
                start_angle,
                start_rotation,
            } => {
                let pointer_m = state.view.screen_to_meters(pointer);
                let delta = angle_deg(center.x, center.y, pointer_m) - start_angle;
                if let Some(plot) = state.plot_mut(plot_id) {
                    let mut rotation = (start_rotation + delta).rem_euclid(360.0);
                    if !precise {
                        rotation = snap(rotation, ROTATION_SNAP_DEG).rem_euclid(360.0);
                    }
                    plot.rotation = rotation;
                }
            }
            Operation::MovingBackground {
                start_pointer,
                start_offset,
            } => {
                state.config.background.x = start_offset.x + (pointer.x - start_pointer.x);
                state.config.background.y = start_offset.y + (pointer.y - start_pointer.y);
            }
            Operation::DrawingSelectionBox { start, .. } => {
                let current = state.view.screen_to_meters(pointer);
                self.operation = Operation::DrawingSelectionBox { start, current };
            }
            Operation::ResizingTerrain {
                handle,
                start_pointer,
                start_width,
                start_height,
            } => {
                let pointer_m = state.view.screen_to_meters(pointer);
                let dx = pointer_m.x - start_pointer.x;
                let dy = pointer_m.y - start_pointer.y;
                if matches!(handle, TerrainHandle::Right | TerrainHandle::Corner) {
                    state.config.terrain_width = (start_width + dx).max(MIN_TERRAIN_M);
                }
                if matches!(handle, TerrainHandle::Bottom | TerrainHandle::Corner) {
                    state.config.terrain_height = (start_height + dy).max(MIN_TERRAIN_M);
                }
            }
        }
    }

    /// Commits the live operation and returns to `Idle`. Valid from any
    /// pointer position, including outside the canvas.
    pub fn pointer_up(&mut self, state: &GardenState) {
        if let Operation::DrawingSelectionBox { start, current } =
            std::mem::replace(&mut self.operation, Operation::Idle)
        {
            let band = Bounds {
                x: start.x.min(current.x),
                y: start.y.min(current.y),
                width: (current.x - start.x).abs(),
                height: (current.y - start.y).abs(),
            };
            if band.width > SELECTION_MIN_M && band.height > SELECTION_MIN_M {
                self.selection = state
                    .plots
                    .iter()
                    .filter(|p| overlaps(&p.bounds(), &band))
                    .map(|p| p.id)
                    .collect();
            } else {
                // Too small to be intentional: treat as a click-to-deselect.
                self.selection.clear();
            }
        }
    }
}

/// Degrees of the vector from (cx, cy) to `to`, in atan2 convention.
fn angle_deg(cx: f64, cy: f64, to: MeterPoint) -> f64 {
    (to.y - cy).atan2(to.x - cx).to_degrees()
}

fn snap(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

//! Motion trace builder
//!
//! Replays the modal command stream into an ordered sequence of absolute
//! 3D waypoints, one per executed motion command. Axis words are modal:
//! an axis omitted from a block keeps its previous value. Blocks without
//! a recognized motion word (`G0`/`G1`) produce no waypoint.

use serde::{Deserialize, Serialize};

use grooveview_gcode::{Block, Program};

/// Motion mode selected by a `G` word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionMode {
    /// G0 — rapid positioning.
    Rapid,
    /// G1 — linear interpolation at feed rate.
    Linear,
}

impl MotionMode {
    /// Map a `G` address to a motion mode, if it is one.
    pub fn from_g_address(address: i64) -> Option<Self> {
        match address {
            0 => Some(Self::Rapid),
            1 => Some(Self::Linear),
            _ => None,
        }
    }
}

/// Modal machine state, one instance per trace.
///
/// Initialized to the origin at pipeline start, updated once per motion
/// command, read-only in between.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MachineState {
    /// Absolute X position in inches.
    pub x: f64,
    /// Absolute Y position in inches.
    pub y: f64,
    /// Absolute Z position in inches; negative means engaged.
    pub z: f64,
    /// Modal feed rate (F word). Tracked but never affects the preview.
    pub feed_rate: f64,
}

/// Absolute tool position after one motion command, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Builds the waypoint trace from tokenized command blocks.
pub struct TraceBuilder {
    state: MachineState,
}

impl TraceBuilder {
    /// Create a builder with the machine at the origin.
    pub fn new() -> Self {
        Self {
            state: MachineState::default(),
        }
    }

    /// Current modal state.
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Process one block, returning a waypoint if it is a motion command.
    ///
    /// Unrecognized words are ignored; `F` updates the modal feed rate
    /// without producing a waypoint on its own.
    pub fn process_block(&mut self, block: &Block) -> Option<Waypoint> {
        let mut motion: Option<MotionMode> = None;
        let mut x = self.state.x;
        let mut y = self.state.y;
        let mut z = self.state.z;

        for (letter, address) in block.words() {
            match letter {
                'G' => {
                    if let Some(mode) = MotionMode::from_g_address(address.int_value()) {
                        motion = Some(mode);
                    }
                }
                'X' => x = address.real_value(),
                'Y' => y = address.real_value(),
                'Z' => z = address.real_value(),
                'F' => self.state.feed_rate = address.real_value(),
                _ => {
                    tracing::trace!(line = block.line_number, letter = %letter, "ignoring word");
                }
            }
        }

        let mode = motion?;
        self.state.x = x;
        self.state.y = y;
        self.state.z = z;
        tracing::trace!(line = block.line_number, ?mode, x, y, z, "motion command");
        Some(Waypoint { x, y, z })
    }

    /// Process a whole program into its waypoint sequence.
    pub fn trace(&mut self, program: &Program) -> Vec<Waypoint> {
        let waypoints: Vec<Waypoint> = program
            .iter()
            .filter_map(|block| self.process_block(block))
            .collect();
        tracing::debug!(
            blocks = program.len(),
            waypoints = waypoints.len(),
            "built motion trace"
        );
        waypoints
    }
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

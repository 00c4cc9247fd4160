use crate::config::{PLATE_DEPTH, PLATE_WIDTH};
use crate::error::RenderError;
use crate::render::{check_frame, plate_instances, Renderer};
use crate::simulation::LatticeState;

/// Shades from lowest to highest displacement
const RAMP: &[u8] = b"@%#*+=-:. ";

/// Text heightmap of the deck, one line per lattice row, written to the log.
///
/// Shading is relative to the largest |z| in the frame; a flat deck is drawn
/// with the middle shade.
#[derive(Debug, Default)]
pub struct HeightmapRenderer {
    frames: u64,
}

impl HeightmapRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Build the text frame without logging it
    pub fn render_lines(state: &LatticeState) -> Vec<String> {
        let instances = plate_instances(state);
        let span = instances
            .iter()
            .fold(0.0f32, |acc, plate| acc.max(plate.origin[2].abs()));

        let mut cells = vec![vec![' '; state.cols()]; state.rows()];
        for plate in &instances {
            let i = (plate.origin[0] / PLATE_WIDTH).round() as usize;
            let j = (plate.origin[1] / PLATE_DEPTH).round() as usize;
            cells[i][j] = shade(plate.origin[2], span);
        }
        cells.into_iter().map(String::from_iter).collect()
    }
}

impl Renderer for HeightmapRenderer {
    fn draw(&mut self, rows: usize, cols: usize, state: &LatticeState) -> Result<(), RenderError> {
        check_frame(rows, cols, state)?;
        self.frames += 1;
        if log::log_enabled!(log::Level::Debug) {
            let lines = Self::render_lines(state);
            log::debug!("frame {}:\n{}", self.frames, lines.join("\n"));
        }
        Ok(())
    }
}

/// Map z in [-span, span] onto the ramp
fn shade(z: f32, span: f32) -> char {
    let last = RAMP.len() - 1;
    let level = if span > 0.0 && z.is_finite() {
        ((z / span + 1.0) / 2.0).clamp(0.0, 1.0)
    } else {
        0.5
    };
    RAMP[(level * last as f32).round() as usize] as char
}

/// Rendering layer — all terminal I/O lives here.
///
/// The swarm draws into a [`TerminalSurface`] cell grid (no I/O, so the
/// render pass cannot fail); [`render`] then queues the grid plus border,
/// HUD and overlays as crossterm commands.
use std::io::Write;
use std::time::Duration;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use swarm_shooter::entities::{EnemyUnit, Projectile, SwarmStatus, Tint};
use swarm_shooter::render::Surface;
use swarm_shooter::score::{final_score, format_score};
use swarm_shooter::swarm::Swarm;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn color_of(tint: Tint) -> Color {
    match tint {
        Tint::Blue => Color::Blue,
        Tint::Yellow => Color::Yellow,
        Tint::Green => Color::Green,
        Tint::Red => Color::Red,
        Tint::White => Color::White,
    }
}

// ── Cell grid ─────────────────────────────────────────────────────────────────

/// Maps arena coordinates onto the terminal play area (inside the border).
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<Option<(char, Color)>>,
}

impl TerminalSurface {
    pub fn new(width: u16, height: u16, arena_width: f32, arena_height: f32) -> Self {
        // Border occupies the outer column on each side, HUD row 0 and the
        // rows at 1 and height-2, hint row height-1.
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Self {
            cols,
            rows,
            scale_x: cols as f32 / arena_width,
            scale_y: rows as f32 / arena_height,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = (x * self.scale_x).floor();
        let row = (y * self.scale_y).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            None
        } else {
            Some((col as u16, row as u16))
        }
    }

    fn put(&mut self, col: u16, row: u16, glyph: char, color: Color) {
        if col < self.cols && row < self.rows {
            self.cells[row as usize * self.cols as usize + col as usize] = Some((glyph, color));
        }
    }

    fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if let Some((glyph, color)) = self.cells[row as usize * self.cols as usize + col as usize] {
                    out.queue(cursor::MoveTo(col + 1, row + 2))?;
                    out.queue(style::SetForegroundColor(color))?;
                    out.queue(Print(glyph))?;
                }
            }
        }
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn draw_unit(&mut self, unit: &EnemyUnit) {
        //   «▼»    ← one cell either side of the centre
        if let Some((col, row)) = self.cell(unit.x, unit.y) {
            let color = color_of(unit.tint);
            if col > 0 {
                self.put(col - 1, row, '«', color);
            }
            self.put(col, row, '▼', color);
            self.put(col + 1, row, '»', color);
        }
    }

    fn draw_projectile(&mut self, projectile: &Projectile) {
        if let Some((col, row)) = self.cell(projectile.x, projectile.y) {
            let glyph = if projectile.dx == 0.0 { '↓' } else { '·' };
            self.put(col, row, glyph, color_of(projectile.tint));
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    swarm: &Swarm,
    elapsed: Duration,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, swarm, elapsed, width)?;

    let arena = swarm.arena();
    let mut surface = TerminalSurface::new(width, height, arena.width, arena.height);
    swarm.render(&mut surface);
    surface.present(out)?;

    draw_controls_hint(out, height)?;

    if swarm.status() != SwarmStatus::Active {
        draw_results(out, swarm, elapsed, width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    swarm: &Swarm,
    elapsed: Duration,
    width: u16,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Round {}   Alive {:>3}   Time {:>4}s",
        swarm.round(),
        swarm.alive_count(),
        elapsed.as_secs()
    )))?;

    let shots = format!("Missiles {:>3}", swarm.missiles().len());
    let rx = width.saturating_sub(shots.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&shots))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Strafe   Q : Quit"))?;
    Ok(())
}

// ── Results overlay ───────────────────────────────────────────────────────────

fn draw_results<W: Write>(
    out: &mut W,
    swarm: &Swarm,
    elapsed: Duration,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let (banner, color) = match swarm.status() {
        SwarmStatus::BreachedFloor => ("║   SWARM  LANDED    ║", Color::Green),
        _ => ("║   SWARM  LOST      ║", Color::Red),
    };
    let score = final_score(elapsed, swarm.alive_count());
    let score_line = format!("Score: {}", format_score(score));

    let lines: [(&str, Color); 3] = [
        ("╔════════════════════╗", color),
        (banner, color),
        ("╚════════════════════╝", color),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(3);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(&score_line))?;

    let hint = "R - Play Again  Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}

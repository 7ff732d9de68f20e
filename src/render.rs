/// Drawing seam between the simulation and whatever displays it.
///
/// Render passes only read simulation state; a `Surface` receives every
/// visible entity once per frame, in draw order.
use crate::entities::{EnemyUnit, Projectile};

pub trait Surface {
    fn draw_unit(&mut self, unit: &EnemyUnit);
    fn draw_projectile(&mut self, projectile: &Projectile);
}

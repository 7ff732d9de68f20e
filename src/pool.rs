//! Recycled projectile storage.
//!
//! Slots are never freed: an expired projectile's slot goes on a free list
//! and the next [`ProjectilePool::acquire`] overwrites it in O(1).  The
//! backing vector only grows when every slot is live.

use crate::entities::Projectile;
use crate::render::Surface;

#[derive(Debug, Default)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    live: Vec<bool>,
    free_list: Vec<usize>,
    count: usize,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `projectile` in a free slot (or a new one) and return its slot index.
    /// A projectile with zero TTL is accepted and reaped on the next update.
    pub fn acquire(&mut self, projectile: Projectile) -> usize {
        self.count += 1;
        if let Some(i) = self.free_list.pop() {
            self.slots[i] = projectile;
            self.live[i] = true;
            i
        } else {
            self.slots.push(projectile);
            self.live.push(true);
            self.slots.len() - 1
        }
    }

    /// Advance every live projectile by its velocity, spend one tick of TTL,
    /// and return expired ones to the free list.
    pub fn update(&mut self) {
        for i in 0..self.slots.len() {
            if !self.live[i] {
                continue;
            }
            let p = &mut self.slots[i];
            p.x += p.dx;
            p.y += p.dy;
            p.ttl = p.ttl.saturating_sub(1);
            if p.ttl == 0 {
                self.release(i);
            }
        }
    }

    fn release(&mut self, i: usize) {
        if self.live[i] {
            self.live[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    /// Expire every projectile at once, keeping the allocated slots.
    pub fn clear(&mut self) {
        for i in 0..self.slots.len() {
            self.release(i);
        }
    }

    /// Live projectiles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.slots
            .iter()
            .zip(&self.live)
            .filter(|(_, live)| **live)
            .map(|(p, _)| p)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Slots allocated so far, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn render(&self, surface: &mut impl Surface) {
        for p in self.iter() {
            surface.draw_projectile(p);
        }
    }
}

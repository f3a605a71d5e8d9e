//! Raw types to name indicies to what would otherwise be fixed length arrays
//!
//! Every traversal in this crate goes NW, NE, SW, SE. That order lives here and
//! nowhere else: iterate with `Quadrant::iter_all`, construct with
//! `Quad::from_fn`/`Quad::try_from_fn`, and place with `Quadrant::offset`.

use std::iter::FusedIterator;
use std::ops::Index;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NW,
    NE,
    SW,
    SE,
}
impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Self::NW, Self::NE, Self::SW, Self::SE];

    pub fn is_north(self) -> bool {
        matches!(self, Self::NW | Self::NE)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::NW | Self::SW)
    }

    /// (x, y) of this quadrant's top left pixel relative to the parent's,
    /// where `half` is the quadrant's side length
    ///
    /// x increases to the east, y increases to the south
    pub fn offset(self, half: usize) -> (usize, usize) {
        let x = if self.is_west() { 0 } else { half };
        let y = if self.is_north() { 0 } else { half };
        (x, y)
    }

    pub fn iter_all() -> impl ExactSizeIterator<Item = Quadrant> {
        QuadrantIter::new()
    }
}
struct QuadrantIter {
    next: Option<Quadrant>,
}
impl QuadrantIter {
    pub fn new() -> Self {
        QuadrantIter {
            next: Some(Quadrant::NW),
        }
    }
}
impl Iterator for QuadrantIter {
    type Item = Quadrant;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.next;
        let next = match curr {
            Some(Quadrant::NW) => Some(Quadrant::NE),
            Some(Quadrant::NE) => Some(Quadrant::SW),
            Some(Quadrant::SW) => Some(Quadrant::SE),
            _ => None,
        };
        self.next = next;
        curr
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.len();
        (size, Some(size))
    }
}
impl FusedIterator for QuadrantIter {}
impl ExactSizeIterator for QuadrantIter {
    fn len(&self) -> usize {
        match self.next {
            Some(Quadrant::NW) => 4,
            Some(Quadrant::NE) => 3,
            Some(Quadrant::SW) => 2,
            Some(Quadrant::SE) => 1,
            None => 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub sw: T,
    pub se: T,
}
impl<T> Quad<T> {
    /// calls `f` once per quadrant, in NW, NE, SW, SE order
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        // struct fields are evaluated in the order they are written
        Quad {
            nw: f(Quadrant::NW),
            ne: f(Quadrant::NE),
            sw: f(Quadrant::SW),
            se: f(Quadrant::SE),
        }
    }
    /// calls `f` once per quadrant, in NW, NE, SW, SE order, stopping at the first error
    pub fn try_from_fn<E>(mut f: impl FnMut(Quadrant) -> Result<T, E>) -> Result<Self, E> {
        Ok(Quad {
            nw: f(Quadrant::NW)?,
            ne: f(Quadrant::NE)?,
            sw: f(Quadrant::SW)?,
            se: f(Quadrant::SE)?,
        })
    }
    pub fn as_ref(&self) -> Quad<&T> {
        Quad {
            nw: &self.nw,
            ne: &self.ne,
            sw: &self.sw,
            se: &self.se,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Quadrant::iter_all().map(|q| &self[q])
    }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            nw: f(self.nw),
            ne: f(self.ne),
            sw: f(self.sw),
            se: f(self.se),
        }
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.sw, self.se].into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::NW => &self.nw,
            Quadrant::NE => &self.ne,
            Quadrant::SW => &self.sw,
            Quadrant::SE => &self.se,
        }
    }
}

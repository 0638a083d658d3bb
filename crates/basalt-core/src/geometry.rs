//! Integer window geometry.
//!
//! Window sizes are unsigned pixel extents, positions are signed (a window can sit
//! left of or above the primary display).

use std::ops::Mul;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl Size<u32> {
    /// Returns true when either extent is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamps both extents to at least one pixel.
    pub fn clamp_nonzero(self) -> Self {
        Size::new(self.width.max(1), self.height.max(1))
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

impl<T> From<(T, T)> for Size<T> {
    fn from((width, height): (T, T)) -> Self {
        Size { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub const fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

impl<T> From<(T, T)> for Pos<T> {
    fn from((x, y): (T, T)) -> Self {
        Pos { x, y }
    }
}

/// A window or display rectangle: top-left position plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(pos: Pos<i32>, size: Size<u32>) -> Self {
        Rect {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    pub const fn pos(&self) -> Pos<i32> {
        Pos::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size<u32> {
        Size::new(self.width, self.height)
    }

    pub fn set_pos(&mut self, pos: Pos<i32>) {
        self.x = pos.x;
        self.y = pos.y;
    }

    pub fn set_size(&mut self, size: Size<u32>) {
        self.width = size.width;
        self.height = size.height;
    }

    /// Returns true if `pos` lies inside the rectangle (right/bottom edges exclusive).
    pub fn contains(&self, pos: Pos<i32>) -> bool {
        let right = self.x as i64 + self.width as i64;
        let bottom = self.y as i64 + self.height as i64;
        pos.x >= self.x && pos.y >= self.y && (pos.x as i64) < right && (pos.y as i64) < bottom
    }
}

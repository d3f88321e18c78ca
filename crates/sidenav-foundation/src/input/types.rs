use crate::geometry::Point;

/// Pointer identity. The shell tracks a single primary pointer today.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PointerId(pub u32);

impl PointerId {
    pub const PRIMARY: PointerId = PointerId(0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer sample in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic timestamp in milliseconds. Only differences are meaningful.
    pub uptime_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: i64) -> Self {
        Self {
            id: PointerId::PRIMARY,
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn down(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_ms)
    }

    pub fn moved(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_ms)
    }

    pub fn up(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_ms)
    }

    pub fn cancel(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y), uptime_ms)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Start,
    Move,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse(Point),
    /// Active touch points; only the first one is used.
    Touch(Vec<Point>),
}

/// Pointer or touch event, positioned relative to the card surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub phase: DragPhase,
    pub source: PointerSource,
}

impl InputEvent {
    pub fn mouse(phase: DragPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse(Point::new(x, y)),
        }
    }

    pub fn touch(phase: DragPhase, touches: Vec<Point>) -> Self {
        Self {
            phase,
            source: PointerSource::Touch(touches),
        }
    }

    pub fn position(&self) -> Option<Point> {
        match &self.source {
            PointerSource::Mouse(point) => Some(*point),
            PointerSource::Touch(touches) => touches.first().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_uses_first_point() {
        let event = InputEvent::touch(
            DragPhase::Move,
            vec![Point::new(3.0, 4.0), Point::new(9.0, 9.0)],
        );
        assert_eq!(event.position(), Some(Point::new(3.0, 4.0)));
        assert_eq!(InputEvent::touch(DragPhase::Move, vec![]).position(), None);
    }
}

/// Turns cursor positions into whole-pixel pan steps while a button is held.
///
/// The sub-pixel remainder is carried over so slow drags still move the view.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragTracker {
    anchor: Option<(f64, f64)>,
}

impl DragTracker {
    pub fn begin(&mut self, position: (f64, f64)) {
        self.anchor = Some(position);
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Whole-pixel offset since the last step, or `None` when not dragging.
    pub fn moved_to(&mut self, position: (f64, f64)) -> Option<(i32, i32)> {
        let (anchor_x, anchor_y) = self.anchor?;
        let dx = (position.0 - anchor_x).trunc();
        let dy = (position.1 - anchor_y).trunc();

        self.anchor = Some((anchor_x + dx, anchor_y + dy));
        Some((dx as i32, dy as i32))
    }
}

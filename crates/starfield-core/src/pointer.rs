use glam::DVec2;

/// Where the most recent pointer movement came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    /// The field is pushed away from the cursor.
    #[default]
    Mouse,
    /// The field follows the finger.
    Touch,
}

impl InputKind {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            InputKind::Mouse => -1.0,
            InputKind::Touch => 1.0,
        }
    }
}

/// Turns raw pointer positions into target-velocity impulses.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    position: Option<DVec2>,
    kind: InputKind,
}

impl PointerTracker {
    pub fn position(&self) -> Option<DVec2> {
        self.position
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn is_touch(&self) -> bool {
        self.kind == InputKind::Touch
    }

    /// Record a move to `pos` and return the impulse to add to the target
    /// velocity. The first move ever seen only stores the position.
    pub fn track(&mut self, pos: DVec2, kind: InputKind, resistance: f64, scale: f64) -> DVec2 {
        self.kind = kind;
        let impulse = match self.position {
            Some(prev) => (pos - prev) / resistance * scale * kind.sign(),
            None => DVec2::ZERO,
        };
        self.position = Some(pos);
        impulse
    }

    /// Pointer left the document. The next move measures its delta from the
    /// origin, which gives a one-frame jump in velocity.
    pub fn leave(&mut self) {
        self.position = Some(DVec2::ZERO);
    }
}

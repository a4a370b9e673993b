use crate::player::inventory::INVENTORY_SLOTS;

/// Level-sampled input for one simulation step. The host fills this from
/// whatever device layer it uses; the core never polls devices itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub mine_held: bool,
    /// Already edge-resolved by the host: true only on the step the place
    /// action was pressed.
    pub place_pressed: bool,
    /// Newly selected hotbar slot, if any.
    pub selected_slot: Option<usize>,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, slot: Option<usize>) -> Self {
        self.selected_slot = slot;
        self
    }

    /// Horizontal intent: -1, 0 or 1.
    pub fn horizontal(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Number-key state for hotbar selection, compared against the previous
/// step to find fresh presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotKeys {
    previous: [bool; INVENTORY_SLOTS],
}

impl SlotKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest slot whose key went from released to pressed.
    pub fn resolve(current: &[bool; INVENTORY_SLOTS], previous: &[bool; INVENTORY_SLOTS]) -> Option<usize> {
        current
            .iter()
            .zip(previous.iter())
            .position(|(&now, &before)| now && !before)
    }

    /// Resolves against the stored previous state, then remembers `current`.
    pub fn update(&mut self, current: [bool; INVENTORY_SLOTS]) -> Option<usize> {
        let selected = Self::resolve(&current, &self.previous);
        self.previous = current;
        selected
    }
}

/// Rising-edge detector for a single button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    previous: bool,
}

impl EdgeTrigger {
    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.previous;
        self.previous = pressed;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_fire_on_press_only() {
        let mut keys = SlotKeys::new();
        let mut held = [false; INVENTORY_SLOTS];
        held[4] = true;

        assert_eq!(keys.update(held), Some(4));
        // Still held: no new selection
        assert_eq!(keys.update(held), None);

        held[1] = true;
        assert_eq!(keys.update(held), Some(1));
        assert_eq!(keys.update([false; INVENTORY_SLOTS]), None);
    }

    #[test]
    fn test_edge_trigger() {
        let mut trigger = EdgeTrigger::default();
        assert!(trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(false));
        assert!(trigger.update(true));
    }

    #[test]
    fn test_horizontal_cancels_out() {
        let both = InputSnapshot {
            move_left: true,
            move_right: true,
            ..InputSnapshot::idle()
        };
        assert_eq!(both.horizontal(), 0.0);
    }
}

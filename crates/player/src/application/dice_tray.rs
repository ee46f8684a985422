//! Dice tray: host side of the dice widget.
//!
//! While the widget is ready, a roll is delegated to it and the value arrives
//! later as a `dice:result` message. Without a ready widget the tray rolls
//! locally through its injected random source.

use rand::Rng;

use rpgficha_domain::DiceSides;
use rpgficha_shared::DiceMessage;

type RollFn = Box<dyn FnMut(u32, u32) -> u32 + Send>;

pub struct DiceTray {
    sides: DiceSides,
    value: i64,
    widget_ready: bool,
    /// `rng(low, high)` returns a value in `low..=high`.
    rng: RollFn,
}

impl Default for DiceTray {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceTray {
    pub fn new() -> Self {
        Self::with_rng(|low, high| rand::thread_rng().gen_range(low..=high))
    }

    pub fn with_rng(rng: impl FnMut(u32, u32) -> u32 + Send + 'static) -> Self {
        Self {
            sides: DiceSides::default(),
            value: 1,
            widget_ready: false,
            rng: Box::new(rng),
        }
    }

    pub fn sides(&self) -> DiceSides {
        self.sides
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_widget_ready(&self) -> bool {
        self.widget_ready
    }

    /// Roll the selected die. Returns the message to post to the widget, or
    /// `None` when the roll was resolved locally.
    pub fn roll(&mut self) -> Option<DiceMessage> {
        let sides = self.sides.sides();
        if self.widget_ready {
            return Some(DiceMessage::Roll { sides });
        }
        self.value = i64::from((self.rng)(1, sides));
        tracing::debug!(sides, value = self.value, "Rolled locally");
        None
    }

    /// Apply a raw message from the widget. Anything unrecognised is ignored.
    pub fn handle_message(&mut self, raw: &str) {
        match DiceMessage::from_json(raw) {
            Some(DiceMessage::Ready) => self.widget_ready = true,
            Some(DiceMessage::Result { result }) => self.value = result,
            _ => {}
        }
    }

    pub fn change_sides(&mut self, sides: DiceSides) {
        self.sides = sides;
        self.value = 1;
    }

    /// The widget went away; later rolls are local until it reports ready again.
    pub fn detach_widget(&mut self) {
        self.widget_ready = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let tray = DiceTray::new();
        assert_eq!(tray.sides(), DiceSides::D20);
        assert_eq!(tray.value(), 1);
        assert!(!tray.is_widget_ready());
    }

    #[test]
    fn local_roll_uses_injected_rng() {
        let mut tray = DiceTray::with_rng(|low, high| {
            assert_eq!((low, high), (1, 8));
            6
        });
        tray.change_sides(DiceSides::D8);

        assert_eq!(tray.roll(), None);
        assert_eq!(tray.value(), 6);
    }

    #[test]
    fn default_rng_stays_in_range() {
        let mut tray = DiceTray::new();
        tray.change_sides(DiceSides::D4);
        for _ in 0..100 {
            tray.roll();
            assert!((1..=4).contains(&tray.value()));
        }
    }

    #[test]
    fn ready_widget_receives_the_roll() {
        let mut tray = DiceTray::with_rng(|_, _| panic!("widget should roll"));
        tray.handle_message(r#"{"type":"dice:ready"}"#);
        assert!(tray.is_widget_ready());

        assert_eq!(tray.roll(), Some(DiceMessage::Roll { sides: 20 }));
        tray.handle_message(r#"{"type":"dice:result","result":17}"#);
        assert_eq!(tray.value(), 17);
    }

    #[test]
    fn ignores_unrelated_messages() {
        let mut tray = DiceTray::with_rng(|_, _| 3);
        tray.handle_message("[1,2,3]");
        tray.handle_message(r#"{"type":"dice:result","result":"x"}"#);
        tray.handle_message(r#"{"type":"theme:changed"}"#);
        assert!(!tray.is_widget_ready());
        assert_eq!(tray.value(), 1);
    }

    #[test]
    fn changing_sides_resets_value_and_detach_goes_local() {
        let mut tray = DiceTray::with_rng(|_, high| high);
        tray.handle_message(r#"{"type":"dice:ready"}"#);
        tray.handle_message(r#"{"type":"dice:result","result":11}"#);

        tray.change_sides(DiceSides::D12);
        assert_eq!(tray.value(), 1);

        tray.detach_widget();
        assert_eq!(tray.roll(), None);
        assert_eq!(tray.value(), 12);
    }
}

/// The Visible component marks a pin that is on the deck.
///
/// Pins are never despawned. Sweeping a fallen pin away removes its `Visible`, and setting a
/// fresh rack gives it back.
///
/// Basic usage:
/// ```ignore
/// world.insert_one(pin, Visible {})
/// world.remove_one::<Visible>(pin)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Visible {}

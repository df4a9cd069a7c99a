//! GPIO button input with async debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - A - upper button
//!   - B - lower button
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! applies the debounce policy, and sends its [`Button`] to the UI channel.
//! Turning a button into a menu event is the controller's job.

use super::input_logic::Debouncer;
use crate::config::BUTTON_CHANNEL_DEPTH;
use crate::menu::Button;
use defmt::{debug, info};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::Instant;

/// Channel carrying button presses from the button tasks to the UI loop.
pub type EventChannel = Channel<CriticalSectionRawMutex, Button, BUTTON_CHANNEL_DEPTH>;

/// Sending half handed to each button task.
pub type EventSender = Sender<'static, CriticalSectionRawMutex, Button, BUTTON_CHANNEL_DEPTH>;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), drops presses that come too soon
/// after the last accepted one, sends the button, then waits for release
/// before repeating.
pub async fn button_task(pin: AnyPin, button: Button, debounce_ms: u64, tx: EventSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);
    let mut debouncer = Debouncer::new(debounce_ms);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        if debouncer.accept(Instant::now().as_millis()) {
            info!("Button: {}", button);
            tx.send(button).await;
        } else {
            debug!("Button: {} bounced", button);
        }

        // Wait for release to avoid repeat triggers.
        btn.wait_for_rising_edge().await;
    }
}

//! pagemenu firmware for nRF52840 + SSD1306.
//!
//! Two button tasks post debounced button presses to a channel; the UI loop
//! below is its only consumer, so every menu transition runs to completion
//! before the next press is looked at.

#![no_std]
#![no_main]

use core::cell::Cell;

use defmt::{debug, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Pin as _};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Instant, Timer};
use pagemenu::config::{
    DEFAULT_ORIENTATION, SCREEN_AUTO_OFF_ENABLED, SCREEN_AUTO_OFF_TIMEOUT_MS, SCREEN_TICK_MS,
};
use pagemenu::menu::{
    Button, MenuController, MenuItem, MenuModel, Page, SystemAction, Transition,
};
use pagemenu::power_logic::ScreenSaver;
use pagemenu::ui::buttons::{self, EventChannel, EventSender};
use pagemenu::ui::display::OledMenuDisplay;
use pagemenu::ui::{ButtonConfig, MenuDisplay};
use pagemenu::{Displayable, Result};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static EVENTS: StaticCell<EventChannel> = StaticCell::new();

#[embassy_executor::task(pool_size = 2)]
async fn button(pin: AnyPin, which: Button, debounce_ms: u64, tx: EventSender) {
    buttons::button_task(pin, which, debounce_ms, tx).await
}

/// Menu shown on boot: two plain pages plus a page of system actions.
fn demo_menu() -> Result<MenuModel<MenuItem>> {
    MenuModel::builder()
        .page(Page::new(
            "Page One",
            ["Thing A", "Thing B", "Thing C"].map(MenuItem::text),
        )?)?
        .page(Page::new(
            "Page Two",
            ["Alpha", "Beta", "Gamma"].map(MenuItem::text),
        )?)?
        .page(Page::new(
            "Utils",
            [
                MenuItem::action("Exit menu app", SystemAction::Exit),
                MenuItem::action("Shut down", SystemAction::ShutDown),
            ],
        )?)?
        .build()
}

/// Blank the panel before leaving the menu.
fn tidy_up<D: MenuDisplay>(display: &mut D) {
    if let Err(e) = display.clear() {
        warn!("Display: clear failed: {}", e);
    }
    if let Err(e) = display.set_backlight(false) {
        warn!("Display: backlight off failed: {}", e);
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("pagemenu starting");

    let orientation = DEFAULT_ORIENTATION;

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = unwrap!(OledMenuDisplay::new(i2c, orientation));
    unwrap!(display.set_backlight(true));

    // The handler only records what to do; the loop acts on it once the
    // transition has finished.
    let pending: Cell<Option<SystemAction>> = Cell::new(None);
    let handler = |item: &MenuItem| {
        info!("Selected: {}", item.name());
        if let Some(action) = item.system_action() {
            pending.set(Some(action));
        } else if let Some(code) = item.code() {
            info!("Selected code: {}", code);
        }
    };
    let mut menu = MenuController::new(unwrap!(demo_menu()), handler, orientation);

    if let Err(e) = display.draw(&menu.render(), orientation) {
        warn!("Display: draw failed: {}", e);
    }

    let events: &'static EventChannel = EVENTS.init(EventChannel::new());
    let wiring = ButtonConfig::new(p.P0_11.degrade(), p.P0_12.degrade());
    let debounce_ms = wiring.debounce_ms;
    for (which, pin) in wiring.into_pins() {
        unwrap!(spawner.spawn(button(pin, which, debounce_ms, events.sender())));
    }

    let mut saver = ScreenSaver::new(
        SCREEN_AUTO_OFF_ENABLED,
        SCREEN_AUTO_OFF_TIMEOUT_MS,
        Instant::now().as_millis(),
    );
    let rx = events.receiver();
    loop {
        let pressed = match select(rx.receive(), Timer::after_millis(SCREEN_TICK_MS)).await {
            Either::First(pressed) => pressed,
            Either::Second(()) => {
                if saver.on_tick(Instant::now().as_millis()) {
                    info!("Display: idle, screen off");
                    if let Err(e) = display.set_backlight(false) {
                        warn!("Display: backlight off failed: {}", e);
                    }
                }
                continue;
            }
        };

        if saver.on_press(Instant::now().as_millis()) {
            debug!("Display: wake, {} dropped", pressed);
            if let Err(e) = display.set_backlight(true) {
                warn!("Display: backlight on failed: {}", e);
            }
            continue;
        }

        if menu.on_button(pressed) == Transition::Redraw {
            if let Err(e) = display.draw(&menu.render(), orientation) {
                warn!("Display: draw failed: {}", e);
            }
        }

        match pending.take() {
            Some(SystemAction::Exit) => {
                info!("Exiting menu");
                tidy_up(&mut display);
                // Buttons stay wired but nothing reads the channel any more.
                core::future::pending::<()>().await;
            }
            Some(SystemAction::ShutDown) => {
                info!("Halting");
                tidy_up(&mut display);
                loop {
                    cortex_m::asm::wfi();
                }
            }
            None => {}
        }
    }
}

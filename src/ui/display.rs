//! SSD1306 OLED display wrapper.

use super::layout_logic::{clip, scroll_offset, Layout};
use super::MenuDisplay;
use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, ICON_SIZE, NEXT_PAGE_LABEL};
use crate::error::{Error, Result};
use crate::menu::{Orientation, RenderRequest};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Triangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
///
/// With the buttons on the left the panel is mounted upside down, so the
/// image is rotated 180°.
pub fn init<I2C>(i2c: I2C, orientation: Orientation) -> Result<Display<I2C>>
where
    I2C: embedded_hal::i2c::I2c,
{
    let rotation = if orientation.buttons_on_right() {
        DisplayRotation::Rotate0
    } else {
        DisplayRotation::Rotate180
    };
    let interface = I2CDisplayInterface::new(i2c);
    let mut display =
        Ssd1306::new(interface, DisplaySize128x64, rotation).into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style(highlighted: bool) -> MonoTextStyle<'static, BinaryColor> {
    let builder = MonoTextStyleBuilder::new().font(&FONT_6X10);
    if highlighted {
        builder
            .text_color(BinaryColor::Off)
            .background_color(BinaryColor::On)
            .build()
    } else {
        builder.text_color(BinaryColor::On).build()
    }
}

fn line_style() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

/// The menu drawn on an SSD1306.
pub struct OledMenuDisplay<I2C> {
    display: Display<I2C>,
}

impl<I2C> OledMenuDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C, orientation: Orientation) -> Result<Self> {
        Ok(Self {
            display: init(i2c, orientation)?,
        })
    }

    /// Separator lines and the two button icons.
    fn draw_widgets(&mut self, layout: &Layout) {
        let header_y = layout.header_line_y();
        let _ = Line::new(Point::new(0, header_y), Point::new(layout.width - 1, header_y))
            .into_styled(line_style())
            .draw(&mut self.display);
        let _ = Line::new(
            Point::new(layout.separator_x, header_y),
            Point::new(layout.separator_x, layout.height - 1),
        )
        .into_styled(line_style())
        .draw(&mut self.display);

        // Execute: filled, pointing right.
        let (x, y) = layout.execute_icon;
        let s = ICON_SIZE;
        let _ = Triangle::new(Point::new(x, y), Point::new(x + s, y + s / 2), Point::new(x, y + s))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.display);

        // Advance: outline, pointing down.
        let (x, y) = layout.advance_icon;
        let _ = Triangle::new(Point::new(x, y), Point::new(x + s, y), Point::new(x + s / 2, y + s))
            .into_styled(line_style())
            .draw(&mut self.display);
    }
}

impl<I2C> MenuDisplay for OledMenuDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn draw(&mut self, request: &RenderRequest<'_>, orientation: Orientation) -> Result<()> {
        let layout = Layout::new(orientation, DISPLAY_WIDTH, DISPLAY_HEIGHT);
        self.display.clear_buffer();

        self.draw_widgets(&layout);

        let title = clip(request.page_title, layout.title_chars());
        let _ = Text::with_baseline(title, Point::zero(), text_style(false), Baseline::Top)
            .draw(&mut self.display);
        let _ = Text::with_baseline(
            NEXT_PAGE_LABEL,
            Point::new(layout.next_label_x, 0),
            text_style(request.next_page_highlighted),
            Baseline::Top,
        )
        .draw(&mut self.display);

        let visible = layout.visible_rows();
        let highlighted = request.highlighted_row().checked_sub(1);
        let first = scroll_offset(highlighted, visible);
        for (row, item) in request.items.iter().skip(first).take(visible).enumerate() {
            let Some(y) = layout.row_top(row) else {
                break;
            };
            let label = clip(item.label, layout.label_chars());
            let _ = Text::with_baseline(
                label,
                Point::new(layout.text_x, y),
                text_style(item.highlighted),
                Baseline::Top,
            )
            .draw(&mut self.display);
        }

        self.display.flush().map_err(|_| Error::Display)
    }

    fn clear(&mut self) -> Result<()> {
        self.display.clear_buffer();
        self.display.flush().map_err(|_| Error::Display)
    }

    fn set_backlight(&mut self, on: bool) -> Result<()> {
        self.display.set_display_on(on).map_err(|_| Error::Display)
    }
}

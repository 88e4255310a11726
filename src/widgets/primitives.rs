//! Low-level drawing primitives shared by the face widgets.
//!
//! Every widget region is cleared with [`clear_region`] before its new content
//! is drawn, so a widget never depends on what was on screen before. The LCARS
//! frame is built from [`draw_bar`] segments and [`draw_elbow`] corners.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadiiBuilder, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::styles::{BAR_LABEL_STYLE, RIGHT_ALIGNED};

/// Corner radius of LCARS elbows.
const ELBOW_RADIUS: u32 = 20;

/// Corner radius of LCARS pills.
const PILL_RADIUS: u32 = 7;

/// Which corner of the frame an elbow sits in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Corner {
    TopLeft,
    BottomLeft,
}

/// Fill `region` with the background colour.
pub fn clear_region<D>(
    display: &mut D,
    region: &Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    region.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(display).ok();
}

/// Flat LCARS bar segment with an optional right-aligned label.
pub fn draw_bar<D>(
    display: &mut D,
    region: &Rectangle,
    color: Rgb565,
    label: Option<&str>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    region.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();

    if let Some(label) = label {
        // Bottom-right corner of the bar, inset 3px
        let anchor = Point::new(
            region.top_left.x + region.size.width as i32 - 3,
            region.top_left.y + region.size.height as i32 - 7,
        );
        Text::with_text_style(label, anchor, BAR_LABEL_STYLE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

/// Rounded LCARS pill (title bar of a slot).
pub fn draw_pill<D>(
    display: &mut D,
    region: &Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(*region, Size::new(PILL_RADIUS, PILL_RADIUS))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// LCARS elbow: a block with one rounded outer corner.
pub fn draw_elbow<D>(
    display: &mut D,
    region: &Rectangle,
    corner: Corner,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let radius = Size::new(ELBOW_RADIUS, ELBOW_RADIUS);
    let radii = match corner {
        Corner::TopLeft => CornerRadiiBuilder::new().top_left(radius).build(),
        Corner::BottomLeft => CornerRadiiBuilder::new().bottom_left(radius).build(),
    };
    RoundedRectangle::new(*region, radii)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

// =============================================================================
// Text Anchors
// =============================================================================

/// Left edge, vertical middle of `region`.
#[inline]
pub const fn left_anchor(region: &Rectangle) -> Point {
    Point::new(region.top_left.x, region.top_left.y + region.size.height as i32 / 2)
}

/// Right edge, vertical middle of `region`.
#[inline]
pub const fn right_anchor(region: &Rectangle) -> Point {
    Point::new(
        region.top_left.x + region.size.width as i32 - 1,
        region.top_left.y + region.size.height as i32 / 2,
    )
}

/// Center of `region`.
#[inline]
pub const fn center_anchor(region: &Rectangle) -> Point {
    Point::new(
        region.top_left.x + region.size.width as i32 / 2,
        region.top_left.y + region.size.height as i32 / 2,
    )
}

/// Single-digit string for 0-9 (out-of-range values wrap).
#[inline]
pub const fn digit_str(d: u8) -> &'static str {
    const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    DIGITS[(d % 10) as usize]
}

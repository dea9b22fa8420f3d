//! Shapes demo: Animate a sweeping wedge on the terminal for a few seconds.
//!
//! Uses the alternate screen; the terminal is restored on exit.

use glyphwork::{raster, Brush, Point, Rgb, Session, Shade, TerminalSurface};
use std::time::Duration;

const FRAMES: i32 = 72;

fn main() -> Result<(), glyphwork::Error> {
    env_logger::init();

    let (cols, rows) = TerminalSurface::size()?;
    let mut session = Session::new(cols, rows)?;
    session.apply_palette(Some(&[Rgb::new(10, 10, 30), Rgb::new(40, 40, 90)][..]))?;

    let mut surface = TerminalSurface::new()?;
    let center = Point::new(i32::from(cols) / 2, i32::from(rows) / 2);
    let radius = i32::from(rows.min(cols / 2)) / 2 - 1;

    for frame in 0..FRAMES {
        session.clear();
        let buffer = session.buffer_mut();
        raster::frame(
            buffer,
            Point::ORIGIN,
            Point::new(i32::from(cols) - 1, i32::from(rows) - 1),
            Brush::new(7),
        );
        raster::grid(
            buffer,
            Point::new(1, 1),
            Point::new(i32::from(cols) - 2, i32::from(rows) - 2),
            4,
            Brush::new(1).with_glyph('.'),
        )?;
        raster::arc(buffer, center, radius, 360, Brush::new(11).with_glyph('o'));
        raster::semi_circle_filled(
            buffer,
            center,
            radius - 1,
            frame * 5,
            60,
            Brush::new(14).with_shade(Shade::Medium),
        );
        raster::text(buffer, Point::new(2, 1), "glyphwork", Brush::new(15));

        session.present(&mut surface)?;
        std::thread::sleep(Duration::from_millis(30));
    }

    Ok(())
}

//! End-to-end render checks.
//!
//! Both wallpapers are rendered for 2024-03-15 (day 75 of a leap year) with
//! the built-in font, then sampled at the centers of the dots around today.

use dotcal::{
    layout::{MosaicSpec, layout_month},
    progress::CalendarDate,
    render::{
        DaysOptions, FontSet, Rgb, Surface, WallpaperOptions, days, render_days,
        render_wallpaper, wallpaper,
    },
};
use pretty_assertions::assert_eq;

fn ides_of_march() -> CalendarDate {
    CalendarDate::from_ymd(2024, 2, 15).unwrap()
}

fn sample(surface: &Surface, x: f64, y: f64) -> Rgb {
    surface
        .pixel(x.floor() as u32, y.floor() as u32)
        .expect("sample inside surface")
}

#[test]
fn test_wallpaper_colors_days_around_today() {
    let options = WallpaperOptions::default();
    let surface = render_wallpaper(&options, None, ides_of_march(), &FontSet::builtin());

    assert_eq!(surface.width(), wallpaper::DEFAULT_WIDTH);
    assert_eq!(surface.height(), wallpaper::DEFAULT_HEIGHT);

    let spec = MosaicSpec::for_canvas(surface.width() as i32);
    let march = layout_month(2, 2024, &spec).unwrap();

    let (x, y) = march.day_center(14);
    assert_eq!(sample(&surface, x, y), wallpaper::DEFAULT_DOT);

    let (x, y) = march.day_center(15);
    assert_eq!(sample(&surface, x, y), wallpaper::DEFAULT_TODAY);

    let (x, y) = march.day_center(16);
    assert_eq!(
        sample(&surface, x, y),
        wallpaper::DEFAULT_DOT.over(wallpaper::DEFAULT_BACKGROUND, wallpaper::FUTURE_OPACITY)
    );
}

#[test]
fn test_wallpaper_past_and_future_months() {
    let surface = render_wallpaper(
        &WallpaperOptions::default(),
        None,
        ides_of_march(),
        &FontSet::builtin(),
    );
    let spec = MosaicSpec::for_canvas(surface.width() as i32);
    let faded = wallpaper::DEFAULT_DOT.over(wallpaper::DEFAULT_BACKGROUND, wallpaper::FUTURE_OPACITY);

    let january = layout_month(0, 2024, &spec).unwrap();
    for day in 1..=31 {
        let (x, y) = january.day_center(day);
        assert_eq!(sample(&surface, x, y), wallpaper::DEFAULT_DOT, "jan {}", day);
    }

    let december = layout_month(11, 2024, &spec).unwrap();
    for day in 1..=31 {
        let (x, y) = december.day_center(day);
        assert_eq!(sample(&surface, x, y), faded, "dec {}", day);
    }
}

#[test]
fn test_days_colors_grid_around_today() {
    let surface = render_days(&DaysOptions::default(), ides_of_march(), &FontSet::builtin());

    // Diameter 40 and pitch 53 from (194, 905); day 75 is column 14 of row 4.
    assert_eq!(surface.pixel(956, 1137), Some(days::DEFAULT_TODAY));
    assert_eq!(surface.pixel(903, 1137), Some(days::DEFAULT_PASSED));
    assert_eq!(surface.pixel(214, 1190), Some(days::DEFAULT_DOT));

    // No dot past day 366.
    assert_eq!(surface.pixel(956, 2197), Some(days::DEFAULT_BACKGROUND));
}

#[test]
fn test_days_custom_colors() {
    let options = DaysOptions {
        today: Rgb { r: 255, g: 0, b: 0 },
        passed: Rgb { r: 0, g: 255, b: 0 },
        ..Default::default()
    };
    let surface = render_days(&options, ides_of_march(), &FontSet::builtin());

    assert_eq!(surface.pixel(956, 1137), Some(options.today));
    assert_eq!(surface.pixel(214, 925), Some(options.passed));
}

#[test]
fn test_renders_encode_as_png() {
    let fonts = FontSet::builtin();
    let small = WallpaperOptions {
        width: 390,
        height: 844,
        ..Default::default()
    };

    let png = render_wallpaper(&small, None, ides_of_march(), &fonts)
        .encode_png()
        .unwrap();
    let decoded = image::load_from_memory(&png).unwrap();

    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!((decoded.width(), decoded.height()), (390, 844));
}

//! Named rates and ratios, as a consumer would use them.
use rational_rate::media::{AspectRatio, FrameRate, Rate, Ratio, rate_by_name, ratio_by_name};
use rational_rate::{Rational32, Rational64};
use rational_rate::{R32, R64};

#[test]
fn ntsc() {
    assert_eq!(Rate::from(FrameRate::Ntsc), R64!(30000, 1001));
    assert_eq!(rate_by_name("ntsc_30p_60i"), Rational64::new(30000, 1001));
}

#[test]
fn unknown_falls_back_to_one() {
    assert!(rate_by_name("vga_70hz").strictly_equals(&R64!(1, 1)));
    assert!(ratio_by_name("32:9").strictly_equals(&R32!(1, 1)));
}

#[test]
fn frame_duration() {
    // One frame of NTSC video lasts 1001/30000 seconds.
    let duration = FrameRate::Ntsc.rate().inverse().unwrap();
    assert!(duration.strictly_equals(&R64!(1001, 30000)));

    // Two frames at 60000/1001 Hz take as long as one at 30000/1001 Hz.
    let doubled = FrameRate::NtscProgressive.rate().inverse().unwrap() * 2_i64;
    assert_eq!(doubled, duration);
}

#[test]
fn stretch_to_widescreen() {
    // Horizontal stretch factor from a 4:3 picture to a 16:9 screen.
    let stretch = Ratio::from(AspectRatio::Widescreen) / Ratio::from(AspectRatio::Standard);
    assert!(stretch.strictly_equals(&R32!(4, 3)));
    assert_eq!(stretch.to_round_percent(), 133);
    assert_eq!(stretch.to_string_with_separator(':'), "4:3");
}

#[test]
fn pal_to_ntsc_frame_count() {
    // 25 seconds of PAL video played back at NTSC rate.
    let frames = Rational64::from_integer(25) * FrameRate::Pal.rate();
    let seconds = frames / FrameRate::Ntsc.rate();
    assert_eq!(seconds, R64!(625 * 1001, 30000));
    assert_eq!(seconds.to_integer(), 20);
}

#[test]
fn ratio_widens_into_rate() {
    let ratio: Rational32 = AspectRatio::Widescreen.into();
    let rate = Rational64::from(ratio) * FrameRate::Film.rate();
    assert_eq!(rate.to_string(), "128/3");
}

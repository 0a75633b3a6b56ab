//! End-to-end tests for the input-driven display flow: lines go in through
//! a line source, the state machine classifies them, and the rendered
//! buffer reflects exactly one visible status widget.

use bootsplash::animation::AnimationCache;
use bootsplash::display::{ChannelLineSource, DisplayMode, LineSource, SplashScreen};
use bootsplash::error::AppError;
use image::{DynamicImage, Rgba, RgbaImage};

fn test_cache(frame_count: usize) -> AnimationCache {
    let icon = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([20, 20, 80, 255])));
    let track = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255])));
    AnimationCache::from_images(&icon, &track, frame_count).unwrap()
}

/// Drains the source into the screen the way the event loop does: one line
/// per readiness event, classification on each.
async fn pump(
    screen: &mut SplashScreen,
    source: &mut ChannelLineSource,
) -> Result<usize, AppError> {
    let mut processed = 0;
    while let Some(line) = source.next_line().await? {
        screen.apply_line(&line);
        processed += 1;
    }
    Ok(processed)
}

#[tokio::test]
async fn test_progress_line_scenario() {
    // "42" -> progress indicator shows 42, text hidden
    let mut screen = SplashScreen::new(test_cache(12));
    let (mut source, tx) = ChannelLineSource::new();

    tx.send("42".to_string()).unwrap();
    drop(tx);
    pump(&mut screen, &mut source).await.unwrap();

    assert_eq!(screen.status().mode(), DisplayMode::ShowingProgress);
    assert_eq!(screen.status().progress().value(), 42);
    assert!(!screen.status().text().is_visible());

    let buffer = screen.build_buffer(80, 24);
    assert!(buffer.contains("42%"));
}

#[tokio::test]
async fn test_text_line_scenario() {
    // "Connecting to network..." -> text shown verbatim, progress hidden
    let mut screen = SplashScreen::new(test_cache(12));
    let (mut source, tx) = ChannelLineSource::new();

    tx.send("Connecting to network...".to_string()).unwrap();
    drop(tx);
    pump(&mut screen, &mut source).await.unwrap();

    assert_eq!(screen.status().mode(), DisplayMode::ShowingText);
    assert_eq!(screen.status().text().content(), "Connecting to network...");
    assert!(!screen.status().progress().is_visible());

    let buffer = screen.build_buffer(80, 24);
    assert!(buffer.contains("Connecting to network..."));
    assert!(!buffer.contains('%'));
}

#[tokio::test]
async fn test_empty_line_then_progress_scenario() {
    // "" followed by "50" -> empty line changes nothing, final state is 50
    let mut screen = SplashScreen::new(test_cache(12));
    let (mut source, tx) = ChannelLineSource::new();

    tx.send(String::new()).unwrap();
    tx.send("50".to_string()).unwrap();
    drop(tx);
    let processed = pump(&mut screen, &mut source).await.unwrap();

    assert_eq!(processed, 2);
    assert_eq!(screen.status().mode(), DisplayMode::ShowingProgress);
    assert_eq!(screen.status().progress().value(), 50);
}

#[tokio::test]
async fn test_leading_zero_progress_scenario() {
    // "007" is digit-only and parses to 7
    let mut screen = SplashScreen::new(test_cache(12));
    let (mut source, tx) = ChannelLineSource::new();

    tx.send("007".to_string()).unwrap();
    drop(tx);
    pump(&mut screen, &mut source).await.unwrap();

    assert_eq!(screen.status().mode(), DisplayMode::ShowingProgress);
    assert_eq!(screen.status().progress().value(), 7);
}

#[tokio::test]
async fn test_mixed_update_sequence_keeps_one_widget_visible() {
    let mut screen = SplashScreen::new(test_cache(12));
    let (mut source, tx) = ChannelLineSource::new();

    let script = [
        "Preparing update",
        "5",
        "25",
        "",
        "Verifying image",
        "99999999999999999999999999",
        "100",
    ];
    for line in script {
        tx.send(line.to_string()).unwrap();
    }
    drop(tx);
    pump(&mut screen, &mut source).await.unwrap();

    // Last line wins; the overflowing digit string before it was shown as text
    assert_eq!(screen.status().mode(), DisplayMode::ShowingProgress);
    assert_eq!(screen.status().progress().value(), 100);

    let visible = usize::from(screen.status().text().is_visible())
        + usize::from(screen.status().progress().is_visible());
    assert_eq!(visible, 1);
}

#[tokio::test]
async fn test_overflowing_digit_line_is_shown_as_text() {
    let mut screen = SplashScreen::new(test_cache(12));
    let (mut source, tx) = ChannelLineSource::new();

    tx.send("184467440737095516160".to_string()).unwrap();
    drop(tx);
    pump(&mut screen, &mut source).await.unwrap();

    assert_eq!(screen.status().mode(), DisplayMode::ShowingText);
    assert_eq!(screen.status().text().content(), "184467440737095516160");
}

#[tokio::test]
async fn test_source_eof_ends_the_stream() {
    let (mut source, tx) = ChannelLineSource::new();
    drop(tx);
    assert_eq!(source.next_line().await.unwrap(), None);
}

#[tokio::test]
async fn test_animation_keeps_running_across_status_updates() {
    // Display updates never reset or skip the playback cursor
    let mut screen = SplashScreen::new(test_cache(8));

    screen.advance_frame();
    screen.advance_frame();
    assert_eq!(screen.cursor(), 2);

    screen.apply_line("halfway there");
    screen.apply_line("50");
    assert_eq!(screen.cursor(), 2);

    screen.advance_frame();
    assert_eq!(screen.cursor(), 3);
}

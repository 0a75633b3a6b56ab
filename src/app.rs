use crate::animation::{AnimationCache, Playback};
use crate::cli::Args;
use crate::config::Config;
use crate::display::{ChannelLineSource, LineSource, SplashScreen, StdinLineSource};
use crate::error::AppError;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io::stdout;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::info;

/// Run the full-screen display flow.
///
/// - Precomputes the animation frames (fatal on asset decode failure,
///   before any terminal state is touched)
/// - Sets up the alternate screen and hides the cursor
/// - Runs the event loop against stdin or the demo feed
/// - Restores terminal state
pub async fn run(args: &Args, config: &Config) -> Result<(), AppError> {
    let cache = AnimationCache::load(
        &config.icon_path,
        &config.track_path,
        config.frame_rate as usize,
    )?;
    info!(
        "Precomputed {} animation frames at {}ms per step",
        cache.frame_count(),
        Playback::tick_interval(cache.frame_count()).as_millis()
    );

    let mut screen = SplashScreen::new(cache);

    let mut out = stdout();
    execute!(out, SetTitle("bootsplash"))?;
    if !args.debug {
        execute!(out, EnterAlternateScreen)?;
    }
    execute!(out, Hide)?;

    let result = if args.demo {
        let mut source = spawn_demo_feed();
        run_event_loop(&mut screen, &mut source).await
    } else {
        let mut source = StdinLineSource::new();
        run_event_loop(&mut screen, &mut source).await
    };

    // Clean up terminal
    execute!(out, Show)?;
    if !args.debug {
        execute!(out, LeaveAlternateScreen)?;
    }

    result
}

/// Single-threaded cooperative event loop: the animation interval tick and
/// the line source are multiplexed on one task, so frame redraws and
/// display updates are strictly serialized and can never race over widget
/// state. Ends when the line source reaches end of stream or the process
/// is interrupted.
async fn run_event_loop<S: LineSource>(
    screen: &mut SplashScreen,
    source: &mut S,
) -> Result<(), AppError> {
    let mut out = stdout();

    let period = Playback::tick_interval(screen.frame_count());
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Frame zero goes up before the first tick or line arrives
    screen.render_buffered(&mut out)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                screen.advance_frame();
                screen.render_buffered(&mut out)?;
            }
            line = source.next_line() => match line? {
                Some(line) => {
                    if screen.apply_line(&line) {
                        screen.render_buffered(&mut out)?;
                    }
                }
                None => {
                    info!("Input stream closed, shutting down");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Demo feed: a scripted status sequence through the channel-backed line
/// source, so the display can be exercised without an installer writing to
/// stdin. The feed ends by dropping the sender, which closes the source
/// like a real EOF.
fn spawn_demo_feed() -> ChannelLineSource {
    let (source, tx) = ChannelLineSource::new();

    tokio::spawn(async move {
        let steps = [
            "Preparing update",
            "Downloading packages",
            "",
            "Verifying image",
        ];
        for step in steps {
            if tx.send(step.to_string()).is_err() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1500)).await;
        }

        for percent in (5..=100).step_by(5) {
            if tx.send(percent.to_string()).is_err() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(400)).await;
        }

        if tx.send("Update complete".to_string()).is_err() {
            return;
        }
        // Keep the sender alive briefly so the final status stays visible
        tokio::time::sleep(Duration::from_secs(3)).await;
    });

    source
}

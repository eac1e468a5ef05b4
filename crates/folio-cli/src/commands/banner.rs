//! Hero banner: the profile name with the glitch effect, next to the footer
//! clock.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use folio_client::PortfolioClient;
use folio_view::clock::{CLOCK_PERIOD, local_clock};
use folio_view::{FRAME_PERIOD, GlitchText, TRIGGER_PERIOD, spawn_interval};

use crate::cli::root_commands::BannerArgs;
use crate::ui;

const FRAMES_PER_TRIGGER: u128 = TRIGGER_PERIOD.as_millis() / FRAME_PERIOD.as_millis();

/// Handle `folio banner`.
pub async fn handle(args: &BannerArgs, client: &PortfolioClient) -> anyhow::Result<()> {
    let name = client.profile().await.name;
    let mut glitch = GlitchText::new(name);

    if !ui::prefs().animate {
        println!("{}  {}", glitch.text(), local_clock());
        return Ok(());
    }

    let clock = Arc::new(Mutex::new(local_clock()));
    let _clock_timer = {
        let clock = Arc::clone(&clock);
        spawn_interval(CLOCK_PERIOD, move || {
            *clock.lock().unwrap_or_else(PoisonError::into_inner) = local_clock();
        })
    };

    if args.glitch_now {
        glitch.start();
    }

    let total_frames = u128::from(args.seconds) * 1000 / FRAME_PERIOD.as_millis();
    let mut interval = tokio::time::interval(FRAME_PERIOD);
    let mut stdout = std::io::stdout();
    for frame in 0..total_frames {
        interval.tick().await;
        if frame > 0 && frame % FRAMES_PER_TRIGGER == 0 && glitch.maybe_trigger() {
            tracing::debug!(frame = %frame, "glitch triggered");
        }
        glitch.tick();

        let time = clock.lock().unwrap_or_else(PoisonError::into_inner).clone();
        write!(stdout, "\r\u{1b}[2K{}  [{}]", glitch.text(), time)?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}

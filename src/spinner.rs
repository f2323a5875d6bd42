//! A terminal spinner shown while a future is pending.

use std::future::Future;
use std::io::Write;
use std::time::{Duration, Instant};

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// Drive `fut` to completion, animating `message` on stderr meanwhile.
/// Returns the output together with how long it took.
pub async fn spin<F: Future>(message: &str, fut: F) -> (F::Output, Duration) {
    let started = Instant::now();
    let mut ticker = tokio::time::interval(INTERVAL);
    tokio::pin!(fut);

    let mut i = 0;
    let output = loop {
        tokio::select! {
            out = &mut fut => break out,
            _ = ticker.tick() => {
                // \r moves to start of line, \x1b[2K clears it
                let frame = FRAMES[i % FRAMES.len()];
                let secs = started.elapsed().as_secs_f32();
                eprint!("\x1b[2K\r{frame} {message} ({secs:.1}s)");
                let _ = std::io::stderr().flush();
                i += 1;
            }
        }
    };

    eprint!("\x1b[2K\r");
    let _ = std::io::stderr().flush();
    (output, started.elapsed())
}

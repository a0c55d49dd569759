//! Self-test for the panel hardware, run with `--test`.

use crate::err::compound_result;
use crate::game::Symbol;
use crate::panel::{ConsolePanel, Panel};
use crate::result::Result;

use log::{error, info};

use std::time::Duration;

const CHECK_TONE_TIME: Duration = Duration::from_millis(300);

/// Exercises the attention sweep and every single lamp once, so
/// a broken lamp or tone shows up before a game is started.
pub fn check_panel() -> Result<()> {
    info!("Testing lamps and tones...");

    let mut panel = ConsolePanel::new();
    let result = panel
        .play_attention_sweep()
        .and_then(|_| {
            compound_result(
                Symbol::ALL
                    .iter()
                    .map(|&symbol| panel.drive(symbol, CHECK_TONE_TIME)),
            )
        })
        .and_then(|_| panel.clear_all());

    match &result {
        Ok(_) => info!("Panel ok."),
        Err(e) => error!("Panel is broken: {}", e),
    }

    result
}

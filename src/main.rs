//! Command line entry point of the memory game.

use simonapparat::check::check_panel;
use simonapparat::log::{init_logging, log_fatal};
use simonapparat::App;

use clap::{crate_name, crate_version, Arg, ArgMatches};
use failure::format_err;
use log::debug;

use std::process::exit;

fn main() {
    let matches = clap::App::new(crate_name!())
        .version(crate_version!())
        .about("Memory game: repeat the growing sequence of lamps without a mistake.")
        .arg(
            Arg::with_name("pace")
                .long("pace")
                .value_name("SECS")
                .help("Seconds each symbol stays lit during sequence playback")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("test")
                .short("t")
                .long("test")
                .help("Tests lamps and tones instead of starting a game"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Silences all warnings and error messages"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .conflicts_with("quiet")
                .help("Prints more detailed messages, may be used multiple times"),
        )
        .get_matches();

    let verbosity = if matches.is_present("quiet") {
        None
    } else {
        Some(matches.occurrences_of("verbose"))
    };
    init_logging(verbosity);

    let result = if matches.is_present("test") {
        check_panel()
    } else {
        build_app(&matches).and_then(|mut app| {
            debug!("game is set up, starting the control loop");
            app.run()
        })
    };

    if let Err(e) = result {
        log_fatal(&e);
        exit(1);
    }
}

fn build_app(matches: &ArgMatches) -> simonapparat::Result<App> {
    let mut app = App::builder();

    if let Some(pace) = matches.value_of("pace") {
        let secs: f64 = pace
            .parse()
            .map_err(|_| format_err!("pace is not a number: {}", pace))?;
        app.pace_secs(secs)?;
    }

    app.stdin_buttons();
    app.terminate_on_ctrlc_and_sigterm();

    Ok(app.build())
}

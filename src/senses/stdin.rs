use crate::senses::{Error, Input, Sense, Stamped};

use log::info;

use std::io::{stdin, Read};

/// Button input over stdin for desktop play.
///
/// Keys 1 to 4 press the four symbol buttons, `r` presses the
/// reset button. Everything else is ignored.
pub struct StdinButtons {
    buf: [u8; 1],
}

impl StdinButtons {
    pub fn new() -> StdinButtons {
        StdinButtons { buf: [0] }
    }
}

impl Sense for StdinButtons {
    /// Tries to read the next button press from stdin, if any.
    fn poll(&mut self) -> Result<Stamped, Error> {
        self.buf[0] = 0;

        match stdin().lock().read(&mut self.buf) {
            Ok(1) => parse_byte_input(self.buf[0])
                .map(Stamped::now)
                .ok_or(Error::WouldBlock),
            // catches EOF, zero-length reads and UTF-8 trouble
            // on windows
            _ => Err(Error::WouldBlock),
        }
    }
}

fn parse_byte_input(byte: u8) -> Option<Input> {
    match byte {
        key @ b'1'..=b'4' => Input::press(key - b'1').ok(),
        b'r' | b'R' => Some(Input::reset()),
        stray @ b'0' | stray @ b'5'..=b'9' => {
            info!("button {} is not part of the game, ignoring", stray - b'0');
            None
        }
        // newlines and any other one-byte character
        _ => None,
    }
}

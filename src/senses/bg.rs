use crate::senses::{Error, Sense, Stamped};

use crossbeam_channel::{bounded, Receiver, Sender};
use log::debug;

use std::thread;
use std::time::Duration;

/// Polls a blocking sense from its own thread, so the control
/// loop can look for input without waiting.
pub struct BackgroundSense(Receiver<Result<Stamped, Error>>);

impl Sense for BackgroundSense {
    fn poll(&mut self) -> Result<Stamped, Error> {
        self.0.try_recv().unwrap_or(Err(Error::WouldBlock))
    }
}

impl BackgroundSense {
    pub fn spawn(sense: Box<dyn Sense + Send>, poll_interval: Option<Duration>) -> Box<dyn Sense> {
        // block when four unconsumed inputs are in the queue
        let (tx, rx) = bounded(4);
        thread::spawn(move || keep_polling(sense, poll_interval, tx));
        Box::new(BackgroundSense(rx))
    }
}

fn keep_polling(
    mut sense: Box<dyn Sense + Send>,
    poll_interval: Option<Duration>,
    sender: Sender<Result<Stamped, Error>>,
) {
    loop {
        match sense.poll() {
            Ok(input) => {
                if let Err(e) = sender.send(Ok(input)) {
                    debug!("Terminating sense thread, receiving end hung up: {:?}", e);
                    break;
                }
            }
            Err(Error::WouldBlock) => match poll_interval {
                Some(interval) => thread::sleep(interval),
                None => thread::yield_now(),
            },
            fatal => {
                if sender.send(fatal).is_err() {
                    debug!("Terminating sense thread, receiving end hung up");
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Symbol;
    use crate::senses::Input;
    use failure::format_err;
    use std::time::Instant;

    struct TwoInputs(usize);

    impl Sense for TwoInputs {
        fn poll(&mut self) -> Result<Stamped, Error> {
            self.0 += 1;
            match self.0 {
                1 => Ok(Stamped::now(Input::reset())),
                2 => Ok(Stamped::now(Input::press(0).unwrap())),
                _ => Err(Error::fatal(format_err!("dried up"))),
            }
        }
    }

    #[test]
    fn delivers_in_order() {
        let mut bg = BackgroundSense::spawn(Box::new(TwoInputs(0)), None);

        assert_eq!(Input::Reset, next_delivered(&mut bg));
        assert_eq!(Input::Press(Symbol::Green), next_delivered(&mut bg));
    }

    fn next_delivered(sense: &mut Box<dyn Sense>) -> Input {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match sense.poll() {
                Ok(stamped) => return stamped.input,
                Err(Error::WouldBlock) => {
                    assert!(
                        Instant::now() < deadline,
                        "timed out waiting for background input"
                    );
                    thread::yield_now();
                }
                Err(Error::Fatal(e)) => panic!("unexpected fatal sense error: {}", e),
            }
        }
    }
}

use crate::result;
use crate::senses::{Error, Input, Sense, Stamped};

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use failure::format_err;

/// In-process input source, e.g. for tests or embedding.
///
/// Inputs sent through the handle come out of the sense one
/// per poll, in sending order.
pub struct Queue(Receiver<Stamped>);

/// Handle for pushing inputs into a `Queue` sense.
///
/// Cheap to clone and safe to use from other threads.
#[derive(Clone)]
pub struct QueueInput(Sender<Stamped>);

impl Queue {
    pub fn new() -> (Self, QueueInput) {
        let (tx, rx) = unbounded();
        (Queue(rx), QueueInput(tx))
    }
}

impl QueueInput {
    /// Queues the input, recording now as the time it happened.
    ///
    /// Fails when the queue sense is gone.
    pub fn send(&self, input: Input) -> result::Result<()> {
        self.0
            .send(Stamped::now(input))
            .map_err(|_| format_err!("queue sense is gone, input not delivered: {:?}", input))?;
        Ok(())
    }
}

impl Sense for Queue {
    fn poll(&mut self) -> Result<Stamped, Error> {
        self.0.try_recv().map_err(|e| match e {
            TryRecvError::Empty => Error::WouldBlock,
            TryRecvError::Disconnected => {
                Error::fatal(format_err!("all input handles for queue sense dropped"))
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Symbol;

    #[test]
    fn sent_inputs_come_out_in_order() {
        let (mut queue, handle) = Queue::new();

        handle.send(Input::Press(Symbol::Red)).unwrap();
        handle.send(Input::Reset).unwrap();

        assert_eq!(Input::Press(Symbol::Red), queue.poll().ok().unwrap().input);
        assert_eq!(Input::Reset, queue.poll().ok().unwrap().input);
        assert!(queue.poll().is_err());
    }

    #[test]
    fn dropped_handle_makes_the_sense_fatal() {
        let (mut queue, handle) = Queue::new();
        drop(handle);

        match queue.poll() {
            Err(Error::Fatal(_)) => (),
            _ => panic!("Expected fatal error after dropping the handle"),
        }
    }
}

use failure;

pub enum Error {
    /// No input pending right now, try again later.
    WouldBlock,
    /// The sense is broken for good and may be dropped.
    Fatal(failure::Error),
}

impl Error {
    pub fn fatal<E: Into<failure::Error>>(cause: E) -> Self {
        Error::Fatal(cause.into())
    }
}

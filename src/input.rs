use std::pin::Pin;

use futures::stream::{self, Stream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::domain::Error;
use crate::domain::traits::LineSource;

/// Reads newline-terminated input, e.g. a buffered stdin.
pub struct LineReader<R: AsyncBufRead> {
    reader: Option<R>,
}

impl<R: AsyncBufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

impl<R> LineSource for LineReader<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    type Lines = Pin<Box<dyn Stream<Item = Result<String, Error>> + Send>>;

    fn lines(&mut self) -> Self::Lines {
        // The stream owns the reader, so it can only be handed out once.
        let Some(reader) = self.reader.take() else {
            return Box::pin(stream::empty());
        };

        Box::pin(stream::unfold(reader, |mut reader| async move {
            let mut buf = Vec::new();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => None,
                // terminals may hand us non UTF-8 bytes, which just won't match anything
                Ok(_) => Some((Ok(String::from_utf8_lossy(&buf).trim().to_owned()), reader)),
                Err(e) => Some((Err(Error::from(e)), reader)),
            }
        }))
    }
}

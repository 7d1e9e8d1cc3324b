use std::pin::Pin;
use std::task::{Context, Poll};

use tokio_stream::Stream;

use crate::circular_fifo::CircularFifo;

// Each poll shifts the oldest element. Nothing can push while the stream is
// borrowed, so an empty buffer ends the stream.
impl<T: Unpin> Stream for CircularFifo<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        Poll::Ready(this.shift())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

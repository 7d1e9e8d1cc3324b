#![cfg(feature = "async")]

use growfifo::CircularFifo;
use tokio_stream::StreamExt;

#[tokio::test]
async fn test_stream_shifts_in_order() {
    let mut fifo = CircularFifo::new(2);
    fifo.extend(["a", "b", "c"]);

    let mut seen = Vec::new();
    while let Some(value) = fifo.next().await {
        seen.push(value);
    }
    assert_eq!(seen, vec!["a", "b", "c"]);
    assert!(fifo.is_empty());
}

#[tokio::test]
async fn test_stream_ends_when_empty() {
    let mut fifo: CircularFifo<u32> = CircularFifo::default();
    assert_eq!(fifo.next().await, None);

    fifo.push(7);
    assert_eq!(fifo.next().await, Some(7));
    assert_eq!(fifo.next().await, None);
}

use growfifo::CircularFifo;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Reading {
    sensor: char,
    value: u16,
}

fn generate_readings(count: usize) -> Vec<Reading> {
    let mut rng = rand::thread_rng();
    let sensors = ['A', 'B', 'C', 'D'];

    (0..count)
        .map(|_| Reading {
            sensor: sensors[rng.gen_range(0..sensors.len())],
            value: rng.gen(),
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut fifo = CircularFifo::new(0);
    for reading in generate_readings(3000) {
        fifo.push(reading);
    }
    info!(size = fifo.len(), capacity = fifo.capacity(), "filled fifo");
    info!(oldest = ?fifo.item(0), newest = ?fifo.item(-1), "fifo ends");

    let mut counter = 0;
    while let Some(reading) = fifo.shift() {
        if counter % 500 == 0 {
            info!(?reading, counter, "shifted");
        }
        counter += 1;
        if counter == 2000 {
            break;
        }
    }

    let mut per_sensor = [0usize; 4];
    fifo.for_each(|reading| per_sensor[(reading.sensor as u8 - b'A') as usize] += 1);
    let total: u64 = fifo.iter().map(|reading| u64::from(reading.value)).sum();
    info!(?per_sensor, total, "remaining readings");
    info!(size = fifo.len(), capacity = fifo.capacity(), "done");
}

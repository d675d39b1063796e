//! Simple usage example

use ring_fifo::Fifo;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("ring_fifo - Simple Example\n");

    // 256-byte ring, messages up to 64 bytes (1-byte headers)
    let fifo = Arc::new(Fifo::new(64, 256));

    let producer_fifo = fifo.clone();
    let consumer_fifo = fifo.clone();

    let producer = thread::spawn(move || {
        for i in 0..10 {
            let message = format!("Message {}", i);
            println!("Sending: {}", message);

            while producer_fifo.push(message.as_bytes()).is_err() {
                // Queue is full, spin and retry
                std::hint::spin_loop();
            }

            thread::sleep(std::time::Duration::from_millis(100));
        }
        println!("Producer finished!");
    });

    let consumer = thread::spawn(move || {
        let mut buf = [0u8; 64];
        for _ in 0..10 {
            loop {
                match consumer_fifo.pop(&mut buf) {
                    Ok(n) => {
                        println!("Received: {}", String::from_utf8_lossy(&buf[..n]));
                        break;
                    }
                    Err(_) => {
                        // Queue is empty, spin and retry
                        std::hint::spin_loop();
                    }
                }
            }
        }
        println!("Consumer finished!");
    });

    producer.join().unwrap();
    consumer.join().unwrap();

    println!("\nExample completed successfully! {:?}", fifo);
}

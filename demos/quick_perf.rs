use ring_fifo::Fifo;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

const MESSAGES: usize = 1_000_000;
const MESSAGE_SIZE: usize = 64;
const MAX_MESSAGE_SIZE: usize = 300;
const CAPACITY: usize = 64 * 1024;

fn main() {
    println!("ring_fifo Performance Test");
    println!("==========================\n");

    println!("Single thread, push until full then drain ({} messages):", MESSAGES);
    report(test_single_thread);

    println!("1 Producer, 1 Consumer ({} messages):", MESSAGES);
    report(test_1p_1c);

    println!("4 Producers, 1 Consumer ({} messages):", MESSAGES);
    report(test_4p_1c);
}

fn report(run: fn()) {
    let start = Instant::now();
    run();
    let elapsed = start.elapsed();
    let throughput = MESSAGES as f64 / elapsed.as_secs_f64();
    let bytes = (MESSAGES * MESSAGE_SIZE) as f64 / elapsed.as_secs_f64() / (1024.0 * 1024.0);
    println!("  Time: {:?}", elapsed);
    println!("  Throughput: {:.2} msgs/sec ({:.1} MiB/s)", throughput, bytes);
    println!("  Latency: {:.0} ns/op\n", elapsed.as_nanos() as f64 / MESSAGES as f64);
}

fn test_single_thread() {
    let fifo = Fifo::new(MAX_MESSAGE_SIZE, CAPACITY);
    let msg = [0xABu8; MESSAGE_SIZE];
    let mut dst = [0u8; MAX_MESSAGE_SIZE];

    let mut i = 0;
    while i < MESSAGES {
        while i < MESSAGES && fifo.push(&msg).is_ok() {
            i += 1;
        }
        while fifo.pop(&mut dst).is_ok() {}
    }
}

fn test_1p_1c() {
    let fifo = Arc::new(Fifo::new(MAX_MESSAGE_SIZE, CAPACITY));
    let f_push = fifo.clone();
    let f_pop = fifo.clone();

    let producer = thread::spawn(move || {
        let msg = [0xABu8; MESSAGE_SIZE];
        for _ in 0..MESSAGES {
            while f_push.push(&msg).is_err() {
                std::hint::spin_loop();
            }
        }
    });

    let consumer = thread::spawn(move || {
        let mut dst = [0u8; MAX_MESSAGE_SIZE];
        for _ in 0..MESSAGES {
            while f_pop.pop(&mut dst).is_err() {
                std::hint::spin_loop();
            }
        }
    });

    producer.join().unwrap();
    consumer.join().unwrap();
}

fn test_4p_1c() {
    const PRODUCERS: usize = 4;
    let fifo = Arc::new(Fifo::new(MAX_MESSAGE_SIZE, CAPACITY));
    let mut handles = vec![];

    for _ in 0..PRODUCERS {
        let f = fifo.clone();
        handles.push(thread::spawn(move || {
            let msg = [0xABu8; MESSAGE_SIZE];
            for _ in 0..MESSAGES / PRODUCERS {
                while f.push(&msg).is_err() {
                    std::hint::spin_loop();
                }
            }
        }));
    }

    let f = fifo.clone();
    handles.push(thread::spawn(move || {
        let mut dst = [0u8; MAX_MESSAGE_SIZE];
        for _ in 0..(MESSAGES / PRODUCERS) * PRODUCERS {
            while f.pop(&mut dst).is_err() {
                std::hint::spin_loop();
            }
        }
    }));

    for h in handles {
        h.join().unwrap();
    }
}

use ring_fifo::{Fifo, PopError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    println!("Work Queue Example\n");

    const NUM_WORKERS: usize = 4;
    const NUM_JOBS: usize = 20;

    let jobs = Arc::new(Fifo::new(32, 512));
    let results = Arc::new(Fifo::new(128, 4096));

    let producer_done = Arc::new(AtomicBool::new(false));

    let jobs_tx = jobs.clone();
    let done_tx = producer_done.clone();
    let producer = thread::spawn(move || {
        for i in 0..NUM_JOBS {
            let job = format!("Job-{:02}", i);
            while jobs_tx.push(job.as_bytes()).is_err() {
                std::hint::spin_loop();
            }
            println!("📝 Enqueued: {}", job);
            thread::sleep(Duration::from_millis(50));
        }
        done_tx.store(true, Ordering::Release);
        println!("✅ All jobs enqueued!");
    });

    let mut workers = vec![];
    for worker_id in 0..NUM_WORKERS {
        let jobs_rx = jobs.clone();
        let results_tx = results.clone();
        let done = producer_done.clone();

        workers.push(thread::spawn(move || {
            let mut processed = 0;
            let mut buf = [0u8; 32];
            loop {
                match jobs_rx.pop(&mut buf) {
                    Ok(n) => {
                        let job = String::from_utf8_lossy(&buf[..n]).into_owned();
                        println!("🔨 Worker {} processing: {}", worker_id, job);

                        thread::sleep(Duration::from_millis(200));

                        let result = format!("{} -> completed by worker {}", job, worker_id);
                        while results_tx.push(result.as_bytes()).is_err() {
                            std::hint::spin_loop();
                        }

                        processed += 1;
                    }
                    Err(PopError::NoMoreData) => {
                        thread::sleep(Duration::from_millis(10));
                        if done.load(Ordering::Acquire) && jobs_rx.is_empty() {
                            break;
                        }
                    }
                    Err(e) => panic!("job buffer sized for max_message_size: {e}"),
                }
            }
            println!("Worker {} finished ({} jobs)", worker_id, processed);
        }));
    }

    let results_rx = results.clone();
    let collector = thread::spawn(move || {
        let mut collected = 0;
        let mut buf = [0u8; 128];
        while collected < NUM_JOBS {
            match results_rx.pop(&mut buf) {
                Ok(n) => {
                    println!("✨ Result: {}", String::from_utf8_lossy(&buf[..n]));
                    collected += 1;
                }
                Err(_) => {
                    std::hint::spin_loop();
                }
            }
        }
        println!("✅ All results collected!");
    });

    producer.join().unwrap();
    for worker in workers {
        worker.join().unwrap();
    }
    collector.join().unwrap();

    println!("\n🎉 Work queue example completed!");
}

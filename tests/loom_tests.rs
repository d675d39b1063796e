#![cfg(loom)]

use loom::sync::Arc;
use loom::thread;
use ring_fifo::Fifo;

#[test]
fn loom_spsc() {
    loom::model(|| {
        let fifo = Arc::new(Fifo::new(4, 8));
        let f_push = fifo.clone();
        let f_pop = fifo.clone();

        let producer = thread::spawn(move || {
            for i in 0..2u8 {
                while f_push.push(&[i, i]).is_err() {
                    thread::yield_now();
                }
            }
        });

        let consumer = thread::spawn(move || {
            let mut received = vec![];
            let mut buf = [0u8; 4];
            for _ in 0..2 {
                loop {
                    if let Ok(n) = f_pop.pop(&mut buf) {
                        received.push(buf[..n].to_vec());
                        break;
                    }
                    thread::yield_now();
                }
            }
            received
        });

        producer.join().unwrap();
        let received = consumer.join().unwrap();
        assert_eq!(received, vec![vec![0, 0], vec![1, 1]]);
    });
}

#[test]
fn loom_mpsc() {
    loom::model(|| {
        let fifo = Arc::new(Fifo::new(4, 16));
        let mut handles = vec![];

        // Two producers
        for i in 0..2u8 {
            let f = fifo.clone();
            handles.push(thread::spawn(move || {
                while f.push(&[i]).is_err() {
                    thread::yield_now();
                }
            }));
        }

        for h in handles {
            h.join().unwrap();
        }

        let mut buf = [0u8; 4];
        let mut seen = vec![];
        while let Ok(n) = fifo.pop(&mut buf) {
            assert_eq!(n, 1);
            seen.push(buf[0]);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1]);
        assert_eq!(fifo.free_bytes(), fifo.capacity());
    });
}

#[test]
fn loom_full_queue() {
    loom::model(|| {
        // room for exactly one 2-byte record
        let fifo = Arc::new(Fifo::new(4, 3));
        let f1 = fifo.clone();
        let f2 = fifo.clone();

        let t1 = thread::spawn(move || f1.push(b"ab").is_ok());
        let t2 = thread::spawn(move || f2.push(b"cd").is_ok());

        let ok1 = t1.join().unwrap();
        let ok2 = t2.join().unwrap();
        assert!(ok1 ^ ok2);

        let mut buf = [0u8; 4];
        assert_eq!(fifo.pop(&mut buf), Ok(2));
        assert!(fifo.pop(&mut buf).is_err());
    });
}

#[test]
fn loom_concurrent_push_pop() {
    loom::model(|| {
        let fifo = Arc::new(Fifo::new(4, 8));

        let f1 = fifo.clone();
        let f2 = fifo.clone();
        let f3 = fifo.clone();

        let h1 = thread::spawn(move || {
            f1.push(&[1]).ok();
        });

        let h2 = thread::spawn(move || {
            let mut buf = [0u8; 4];
            f2.pop(&mut buf).ok();
        });

        let h3 = thread::spawn(move || {
            f3.push(&[2, 2]).ok();
        });

        h1.join().unwrap();
        h2.join().unwrap();
        h3.join().unwrap();

        assert_eq!(fifo.used_bytes() + fifo.free_bytes(), fifo.capacity());
    });
}

#[test]
fn loom_buffer_too_small_race() {
    loom::model(|| {
        let fifo = Arc::new(Fifo::new(4, 8));
        fifo.push(b"abc").unwrap();

        let f1 = fifo.clone();
        let f2 = fifo.clone();

        let small = thread::spawn(move || {
            let mut buf = [0u8; 1];
            f1.pop(&mut buf).is_ok()
        });
        let large = thread::spawn(move || {
            let mut buf = [0u8; 4];
            f2.pop(&mut buf).ok()
        });

        assert!(!small.join().unwrap());
        assert_eq!(large.join().unwrap(), Some(3));
        assert!(fifo.is_empty());
    });
}

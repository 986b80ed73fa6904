use std::sync::{Arc, Mutex};
use std::thread;

use thing_vector::{Thing, ThingVector};

fn main() {
    println!("--- Lock-guarded Sharing Example ---");
    // The container is not safe for concurrent mutation, so the whole
    // thing sits behind one lock.
    let shared = Arc::new(Mutex::new(ThingVector::new()));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..25 {
                    let mut things = shared.lock().unwrap();
                    things.push(Thing::new(worker * 100 + i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let things = shared.lock().unwrap();
    println!("len: {}, cap: {}", things.len(), things.capacity());
    assert_eq!(things.len(), 100);
}

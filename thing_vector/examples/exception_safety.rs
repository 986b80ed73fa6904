use std::panic;

use thing_vector::{stats, Thing, ThingVector};

fn main() {
    println!("--- Drop Safety Example ---");
    let before = stats::live_things();

    {
        let mut things = ThingVector::new();
        for i in 0..3 {
            things.push(Thing::new(i));
        }
        println!("Container holds {} things.", things.len());
        // Scope ends here, every live thing is dropped with the container
    }
    println!("Live things after scope: {}", stats::live_things() - before);
    assert_eq!(stats::live_things(), before);

    // A panic half way through still releases the buffer and its things
    let result = panic::catch_unwind(|| {
        let mut things = ThingVector::new();
        for i in 0..4 {
            things.push(Thing::new(i));
        }
        let _ = &things[10];
    });
    assert!(result.is_err());
    println!("Live things after panic: {}", stats::live_things() - before);
    assert_eq!(stats::live_things(), before);
}

use thing_vector::{Thing, ThingVector, VectorError};

fn main() {
    println!("Initializing ThingVector...");
    let mut things = ThingVector::new();
    assert_eq!(things.capacity(), 0);
    assert_eq!(
        things.at(0),
        Err(VectorError::IndexOutOfRange { index: 0, len: 0 })
    );

    println!("Pushing elements...");
    for i in 0..10 {
        things.push(Thing::new(i));
    }

    assert_eq!(things.len(), 10);
    println!("Length: {}, capacity: {}", things.len(), things.capacity());

    println!("Iterating elements:");
    for (i, thing) in things.as_slice().iter().enumerate() {
        println!("Index {}: {}", i, thing);
        assert_eq!(i as i64, thing.value());
    }

    println!("Popping elements...");
    while let Ok(thing) = things.pop() {
        print!("{} (cap {}) ", thing, things.capacity());
    }
    println!("\nAll elements popped.");

    assert!(things.is_empty());
    assert_eq!(things.pop(), Err(VectorError::EmptyContainer));
    println!("Sample run passed successfully.");
}

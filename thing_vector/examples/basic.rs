use thing_vector::{Thing, ThingVector};

fn main() {
    println!("--- Basic Usage Example ---");
    let mut things = ThingVector::new();

    for i in 1..=5 {
        things.push(Thing::new(i * 10));
        println!(
            "Pushed: {}, len: {}, cap: {}",
            i * 10,
            things.len(),
            things.capacity()
        );
    }

    println!("Elements: {:?}", things);
    println!("Front: {}, back: {}", things.front(), things.back());

    match things.at(7) {
        Ok(thing) => println!("at(7) = {thing}"),
        Err(err) => println!("at(7) failed: {err}"),
    }

    while let Ok(thing) = things.pop() {
        println!(
            "Popped: {}, len: {}, cap: {}",
            thing,
            things.len(),
            things.capacity()
        );
    }

    if let Err(err) = things.pop() {
        println!("pop on empty: {err}");
    }
}

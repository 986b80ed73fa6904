use super::*;
use crossbeam::scope;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

fn filled(values: impl IntoIterator<Item = i64>) -> ThingVector {
    let mut v = ThingVector::new();
    for value in values {
        v.push(Thing::new(value));
    }
    v
}

fn values(v: &ThingVector) -> Vec<i64> {
    v.as_slice().iter().map(Thing::value).collect()
}

#[test]
fn test_new_is_empty() {
    let v = ThingVector::new();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());
    assert_eq!(v.reallocations(), 0);
    assert_eq!(v.at(0), Err(VectorError::IndexOutOfRange { index: 0, len: 0 }));
    assert!(v.begin().is_null());
    assert!(v.end().is_null());
}

#[test]
fn test_basic_push_pop() {
    let mut v = filled(1..=5);
    assert_eq!(v.len(), 5);
    assert!(v.capacity() >= 5);
    assert_eq!(v.front().value(), 1);
    assert_eq!(v.back().value(), 5);

    assert_eq!(v.pop().map(|t| t.value()), Ok(5));
    assert_eq!(v.pop().map(|t| t.value()), Ok(4));
    assert_eq!(v.len(), 3);
    assert_eq!(values(&v), vec![1, 2, 3]);
}

#[test]
fn test_pop_empty_leaves_state_untouched() {
    let mut v = ThingVector::with_capacity(4);
    assert_eq!(v.pop(), Err(VectorError::EmptyContainer));
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 4);

    let mut v = ThingVector::new();
    assert_eq!(v.pop(), Err(VectorError::EmptyContainer));
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_len_tracks_pushes() {
    let mut v = ThingVector::new();
    for i in 0..100 {
        v.push(Thing::new(i));
        assert_eq!(v.len() as i64, i + 1);
        assert!(v.capacity() >= v.len());
    }
}

#[test]
fn test_growth_doubles() {
    let mut v = ThingVector::new();
    let mut capacities = vec![v.capacity()];
    for i in 0..33 {
        v.push(Thing::new(i));
        if v.capacity() != *capacities.last().unwrap() {
            assert_eq!(stats::last_alloc(), v.capacity());
            capacities.push(v.capacity());
        }
    }
    assert_eq!(capacities, vec![0, 1, 2, 4, 8, 16, 32, 64]);
    assert_eq!(v.reallocations(), 7);
}

#[test]
fn test_push_then_pop_restores_contents() {
    let mut v = filled(0..7);
    let before = values(&v);
    v.push(Thing::new(99));
    assert_eq!(v.pop().map(|t| t.value()), Ok(99));
    assert_eq!(v.len(), before.len());
    assert_eq!(values(&v), before);
}

#[test]
fn test_shrink_below_a_quarter() {
    init_logging();
    let mut v = filled(0..16);
    assert_eq!(v.capacity(), 16);

    while v.len() > 4 {
        v.pop().unwrap();
        assert_eq!(v.capacity(), 16);
    }
    v.pop().unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 8);
    assert_eq!(stats::last_alloc(), 8);
    assert_eq!(values(&v), vec![0, 1, 2]);

    v.pop().unwrap();
    assert_eq!(v.capacity(), 8);
    v.pop().unwrap();
    assert_eq!(v.capacity(), 4);
    v.pop().unwrap();
    assert_eq!(v.capacity(), 2);
    assert!(v.is_empty());
}

#[test]
fn test_alternating_push_pop_does_not_thrash() {
    for size in 0..40 {
        let mut v = filled(0..size);
        let start = v.reallocations();
        for round in 0..100 {
            v.push(Thing::new(round));
            v.pop().unwrap();
        }
        assert!(v.reallocations() - start <= 1, "size {size} thrashed");

        let mut v = filled(0..size.max(1));
        let start = v.reallocations();
        for round in 0..100 {
            v.pop().unwrap();
            v.push(Thing::new(round));
        }
        assert!(v.reallocations() - start <= 1, "size {size} thrashed");
    }
}

#[test]
fn test_at_matches_index() {
    let v = filled([10, 20, 30]);
    for i in 0..v.len() {
        assert_eq!(v.at(i).unwrap(), &v[i]);
    }
    assert_eq!(v.at(3), Err(VectorError::IndexOutOfRange { index: 3, len: 3 }));
    assert!(v.at(usize::MAX).is_err());
}

#[test]
fn test_mutable_access() {
    let mut v = filled([1, 2, 3]);
    v.front_mut().set_value(100);
    v.back_mut().set_value(300);
    v[1].set_value(200);
    let middle = v[1].value();
    v.at_mut(1).unwrap().set_value(middle + 1);
    assert_eq!(values(&v), vec![100, 201, 300]);
    assert_eq!(
        v.at_mut(5).err(),
        Some(VectorError::IndexOutOfRange { index: 5, len: 3 })
    );
}

#[test]
fn test_begin_end_traversal() {
    let v = filled(1..=6);
    let mut seen = Vec::new();
    let mut cursor = v.begin();
    while cursor != v.end() {
        unsafe {
            seen.push((*cursor).value());
            cursor = cursor.add(1);
        }
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(unsafe { v.end().offset_from(v.begin()) }, 6);
}

#[test]
fn test_begin_end_null_after_draining() {
    let mut v = filled(0..3);
    while v.pop().is_ok() {}
    assert!(v.capacity() > 0);
    assert!(v.begin().is_null());
    assert!(v.end().is_null());
}

#[test]
fn test_unchecked_access() {
    let mut v = filled([4, 5, 6]);
    unsafe {
        assert_eq!(v.get_unchecked(2).value(), 6);
        v.get_unchecked_mut(0).set_value(40);
    }
    assert_eq!(v.front().value(), 40);
}

#[test]
#[should_panic]
fn test_front_on_empty_panics() {
    let v = ThingVector::new();
    v.front();
}

#[test]
#[should_panic(expected = "empty ThingVector")]
fn test_back_on_empty_panics() {
    let v = ThingVector::new();
    v.back();
}

#[test]
#[should_panic]
fn test_index_out_of_bounds_panics() {
    let v = filled([1]);
    let _ = &v[1];
}

#[test]
fn test_raii_drop() {
    let before = stats::live_things();
    {
        let mut v = filled(0..10);
        assert_eq!(stats::live_things(), before + 10);
        drop(v.pop().unwrap());
        assert_eq!(stats::live_things(), before + 9);
    }
    assert_eq!(stats::live_things(), before);
}

#[test]
fn test_reallocation_moves_without_copying() {
    let before = stats::live_things();
    let mut v = ThingVector::new();
    for i in 0..50 {
        v.push(Thing::new(i));
        assert_eq!(stats::live_things(), before + v.len() as isize);
    }
    while v.len() > 1 {
        v.pop().unwrap();
        assert_eq!(stats::live_things(), before + v.len() as isize);
    }
}

#[test]
fn test_with_capacity() {
    let v = ThingVector::with_capacity(10);
    assert_eq!(v.capacity(), 10);
    assert_eq!(stats::last_alloc(), 10);
    assert!(v.is_empty());
    assert_eq!(ThingVector::with_capacity(0).capacity(), 0);
}

#[test]
fn test_debug_lists_values() {
    assert_eq!(format!("{:?}", filled([1, 2, 3])), "[1, 2, 3]");
    assert_eq!(format!("{:?}", ThingVector::default()), "[]");
}

#[test]
fn test_concurrent_reads() {
    let v = filled(0..100);

    scope(|s| {
        s.spawn(|_| {
            let sum: i64 = v.as_slice().iter().map(Thing::value).sum();
            assert_eq!(sum, 4950);
        });
        s.spawn(|_| {
            for i in 0..v.len() {
                assert_eq!(v.at(i).unwrap().value(), i as i64);
            }
        });
    })
    .unwrap();
}

#[test]
fn test_random_ops_match_model() {
    let mut rng = StdRng::seed_from_u64(0x7415_6e67);
    let mut v = ThingVector::new();
    let mut model: Vec<i64> = Vec::new();

    for _ in 0..5_000 {
        let cap_before = v.capacity();
        match rng.gen_range(0..10) {
            0..=5 => {
                let value = rng.gen::<i64>();
                v.push(Thing::new(value));
                model.push(value);
                if model.len() - 1 == cap_before {
                    assert_eq!(v.capacity(), policy::grown_capacity(cap_before).unwrap());
                } else {
                    assert_eq!(v.capacity(), cap_before);
                }
            }
            6..=8 => match model.pop() {
                Some(expected) => {
                    assert_eq!(v.pop().unwrap().value(), expected);
                    let expected_cap =
                        policy::shrunk_capacity(model.len(), cap_before).unwrap_or(cap_before);
                    assert_eq!(v.capacity(), expected_cap);
                }
                None => {
                    assert_eq!(v.pop(), Err(VectorError::EmptyContainer));
                    assert_eq!(v.capacity(), cap_before);
                }
            },
            _ => {
                let index = rng.gen_range(0..model.len() + 2);
                match model.get(index) {
                    Some(expected) => assert_eq!(v.at(index).unwrap().value(), *expected),
                    None => assert!(v.at(index).is_err()),
                }
            }
        }

        assert_eq!(v.len(), model.len());
        assert!(v.capacity() >= v.len());
    }
    assert_eq!(values(&v), model);
}

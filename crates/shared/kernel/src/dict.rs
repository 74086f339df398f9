//! `map`, `filter` and `reduce` over string-keyed mappings.
//!
//! Every helper walks the mapping in its own iteration order and calls the
//! callback exactly once per entry. Order is therefore a property of the
//! mapping type the caller passes in: `BTreeMap` visits keys sorted, a slice of
//! pairs visits them as inserted, `HashMap` makes no promise.
//!
//! Inputs are borrowed and never modified.

/// Left fold over `(key, value)` entries.
///
/// Starting from `initial`, each entry replaces the accumulator with
/// `reducer(accumulator, value, key)`. An empty mapping returns `initial`
/// without calling `reducer`.
pub fn reduce_dict<'a, K, T, S, F>(
    dict: impl IntoIterator<Item = (&'a K, &'a T)>,
    mut reducer: F,
    initial: S,
) -> S
where
    K: AsRef<str> + ?Sized + 'a,
    T: 'a,
    F: FnMut(S, &'a T, &'a str) -> S,
{
    dict.into_iter().fold(initial, |acc, (key, value)| reducer(acc, value, key.as_ref()))
}

/// Builds a new mapping with the same keys and `mapper(value, key)` as values.
pub fn map_dict<'a, K, T, S, C, F>(
    dict: impl IntoIterator<Item = (&'a K, &'a T)>,
    mut mapper: F,
) -> C
where
    K: AsRef<str> + ?Sized + 'a,
    T: 'a,
    F: FnMut(&'a T, &'a str) -> S,
    C: FromIterator<(String, S)>,
{
    dict.into_iter()
        .map(|(key, value)| {
            let key = key.as_ref();
            (key.to_owned(), mapper(value, key))
        })
        .collect()
}

/// Builds a new mapping holding clones of the entries `predicate` accepts.
pub fn filter_dict<'a, K, T, C, F>(
    dict: impl IntoIterator<Item = (&'a K, &'a T)>,
    mut predicate: F,
) -> C
where
    K: AsRef<str> + ?Sized + 'a,
    T: Clone + 'a,
    F: FnMut(&'a T, &'a str) -> bool,
    C: FromIterator<(String, T)>,
{
    dict.into_iter()
        .filter_map(|(key, value)| {
            let key = key.as_ref();
            predicate(value, key).then(|| (key.to_owned(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[derive(Debug, Clone, PartialEq)]
    struct Fruit {
        color: &'static str,
        mass: u32,
    }

    fn fruits() -> Vec<(String, Fruit)> {
        [
            ("apple", "red", 100),
            ("grape", "red", 5),
            ("banana", "yellow", 183),
            ("lemon", "yellow", 80),
            ("pear", "green", 178),
            ("orange", "orange", 262),
            ("raspberry", "red", 4),
            ("cherry", "red", 5),
        ]
        .into_iter()
        .map(|(name, color, mass)| (name.to_owned(), Fruit { color, mass }))
        .collect()
    }

    #[test]
    fn reduce_sums_values_calling_reducer_once_per_entry() {
        let dict = BTreeMap::from([("a".to_owned(), 2_i32), ("b".to_owned(), 3)]);
        let mut calls = 0;

        let total = reduce_dict(
            &dict,
            |acc, value, _key| {
                calls += 1;
                acc + value
            },
            0,
        );

        assert_eq!(total, 5);
        assert_eq!(calls, 2);
    }

    #[test]
    fn reduce_on_empty_returns_initial_untouched() {
        let dict: HashMap<String, i32> = HashMap::new();
        let mut called = false;

        let result = reduce_dict(
            &dict,
            |_acc: String, _value, _key| {
                called = true;
                String::from("changed")
            },
            String::from("x"),
        );

        assert_eq!(result, "x");
        assert!(!called);
    }

    #[test]
    fn reduce_follows_the_mapping_order() {
        let pairs = fruits();
        let visited = reduce_dict(
            pairs.iter().map(|(k, v)| (k, v)),
            |mut acc: Vec<String>, _fruit, name| {
                acc.push(name.to_owned());
                acc
            },
            Vec::new(),
        );

        let expected: Vec<String> = pairs.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn reduce_total_fruit_mass() {
        let pairs = fruits();
        let mass =
            reduce_dict(pairs.iter().map(|(k, v)| (k, v)), |acc, fruit, _| acc + fruit.mass, 0);
        assert_eq!(mass, 817);
    }

    #[test]
    fn reduce_accepts_str_keys() {
        let dict: BTreeMap<&str, u8> = BTreeMap::from([("x", 1), ("y", 2)]);
        let keys =
            reduce_dict(dict.iter().map(|(k, v)| (*k, v)), |acc, _, key| acc + key, String::new());
        assert_eq!(keys, "xy");
    }

    #[test]
    fn map_keeps_keys_and_transforms_values() {
        let pairs = fruits();
        let kg: BTreeMap<String, (f64, String)> =
            map_dict(pairs.iter().map(|(k, v)| (k, v)), |fruit, name| {
                (f64::from(fruit.mass) * 0.001, name.to_owned())
            });

        assert_eq!(kg.len(), pairs.len());
        let (apple_kg, apple_name) = &kg["apple"];
        assert!((apple_kg - 0.1).abs() < 1e-9);
        assert_eq!(apple_name, "apple");
    }

    #[test]
    fn filter_keeps_matching_entries_only() {
        let pairs = fruits();
        let red: Vec<(String, Fruit)> =
            filter_dict(pairs.iter().map(|(k, v)| (k, v)), |fruit, _| fruit.color == "red");

        let names: Vec<&str> = red.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["apple", "grape", "raspberry", "cherry"]);
        assert_eq!(pairs.len(), 8, "input must not be modified");
    }

    #[test]
    fn filter_can_use_the_key() {
        let dict = BTreeMap::from([("keep".to_owned(), 1_i32), ("drop".to_owned(), 2)]);
        let kept: HashMap<String, i32> = filter_dict(&dict, |_, key| key.starts_with('k'));
        assert_eq!(kept, HashMap::from([("keep".to_owned(), 1)]));
    }
}

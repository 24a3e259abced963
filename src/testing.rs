use proptest::{
    collection::{hash_set, vec},
    prelude::*,
    sample::SizeRange,
};

use crate::prelude::*;

/// A collection of unique keys, in random (insertion) order.
pub fn distinct_keys(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Key>> {
    hash_set(any::<Key>(), size)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Any integer a command line may carry, biased towards the valid key range
/// and its immediate neighbours.
pub fn raw_keys() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => Key::MIN..=Key::MAX,
        1 => -5i64..=Key::MIN,
        1 => Key::MAX..=(Key::MAX + 100),
    ]
}

/// A single well-formed command line.
pub fn command_lines() -> impl Strategy<Value = String> {
    prop_oneof![
        raw_keys().prop_map(|key| format!("Insert:{}", key)),
        raw_keys().prop_map(|key| format!("Delete:{}", key)),
        raw_keys().prop_map(|key| format!("Contains:{}", key)),
        Just("PrintTree".to_string()),
        Just("Height".to_string()),
        Just("Size".to_string()),
        Just("FindMin".to_string()),
        Just("FindMax".to_string()),
    ]
}

/// A script of well-formed command lines.
pub fn scripts(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<String>> {
    vec(command_lines(), size)
}

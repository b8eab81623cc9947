//! Property tests for AttributeMap invariants

use faceplate_editor::{AttributeMap, Key, PreviewRenderer, RunStyle, Value};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Set(String, i64),
    Remove(String),
}

fn key_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![":weight", ":slant", ":height", ":box", ":family", ":inherit"])
        .prop_map(|s| s.to_string())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (key_name(), any::<i64>()).prop_map(|(k, v)| Op::Set(k, v)),
        key_name().prop_map(Op::Remove),
    ]
}

fn apply(map: &mut AttributeMap, op: &Op) {
    match op {
        Op::Set(k, v) => {
            map.set(Key::new(k.clone()), Value::Int(*v));
        }
        Op::Remove(k) => {
            map.remove(&Key::new(k.clone()));
        }
    }
}

proptest! {
    #[test]
    fn keys_stay_unique(ops in prop::collection::vec(op(), 0..64)) {
        let mut map = AttributeMap::new();
        for op in &ops {
            apply(&mut map, op);
            let keys: HashSet<_> = map.keys().collect();
            prop_assert_eq!(keys.len(), map.len());
        }
    }

    #[test]
    fn overwrite_is_stable_in_place(
        ops in prop::collection::vec(op(), 0..32),
        name in key_name(),
        v1 in any::<i64>(),
        v2 in any::<i64>(),
    ) {
        let mut map = AttributeMap::new();
        for op in &ops {
            apply(&mut map, op);
        }
        let key = Key::new(name);

        map.set(key.clone(), Value::Int(v1));
        let position = map.keys().position(|k| *k == key);
        map.set(key.clone(), Value::Int(v2));

        prop_assert_eq!(map.get(&key), Some(&Value::Int(v2)));
        prop_assert_eq!(map.keys().position(|k| *k == key), position);
    }

    #[test]
    fn removing_absent_key_is_identity(ops in prop::collection::vec(op(), 0..32)) {
        let mut map = AttributeMap::new();
        for op in &ops {
            apply(&mut map, op);
        }
        let absent = Key::new(":not-a-face-key");

        let after = map.clone().without(&absent);
        prop_assert_eq!(after, map);
    }

    #[test]
    fn render_shape_is_fixed(ops in prop::collection::vec(op(), 0..16)) {
        let mut map = AttributeMap::new();
        for op in &ops {
            apply(&mut map, op);
        }

        let sample = PreviewRenderer::default().render(&map);

        prop_assert_eq!(sample.len(), 9);
        prop_assert_eq!(sample.runs.len(), 2);
        prop_assert_eq!(sample.runs[0].range.clone(), 0..9);
        prop_assert_eq!(&sample.runs[0].style, &RunStyle::Named("prompt".to_string()));
        prop_assert_eq!(sample.runs[1].range.clone(), 1..7);
        prop_assert_eq!(&sample.runs[1].style, &RunStyle::Attributes(map.clone()));
    }
}

//! Property tests: any sequence of start/end/get calls maintains the
//! at-most-one-operation-per-position invariant and agrees with a naive
//! model of the registry.

use std::collections::HashMap;
use std::sync::Arc;

use gridmill_core::{BlockPos, TimedOperation, WorldId};
use gridmill_registry::OperationProcessor;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Call {
    Start(i32),
    End(i32),
    Get(i32),
}

fn arb_call() -> impl Strategy<Value = Call> {
    // Four positions is enough to exercise collisions heavily.
    let slot = 0i32..4;
    prop_oneof![
        slot.clone().prop_map(Call::Start),
        slot.clone().prop_map(Call::End),
        slot.prop_map(Call::Get),
    ]
}

fn pos(x: i32) -> BlockPos {
    BlockPos::new(WorldId(0), x, 0, 0)
}

proptest! {
    #[test]
    fn registry_agrees_with_naive_model(calls in proptest::collection::vec(arb_call(), 0..200)) {
        let processor = OperationProcessor::new();
        let mut model: HashMap<i32, Arc<TimedOperation>> = HashMap::new();

        for call in calls {
            match call {
                Call::Start(x) => {
                    let op = Arc::new(TimedOperation::new(10));
                    let started = processor.start(pos(x), op.clone()).unwrap();
                    let vacant = !model.contains_key(&x);
                    prop_assert_eq!(started, vacant);
                    if vacant {
                        model.insert(x, op);
                    }
                }
                Call::End(x) => {
                    let ended = processor.end(pos(x));
                    prop_assert_eq!(ended, model.remove(&x).is_some());
                }
                Call::Get(x) => {
                    let actual = processor.get(pos(x));
                    let expected = model.get(&x);
                    prop_assert_eq!(actual.is_some(), expected.is_some());
                    if let (Some(actual), Some(expected)) = (&actual, expected) {
                        prop_assert!(Arc::ptr_eq(actual, expected));
                    }
                }
            }
        }

        prop_assert_eq!(processor.len(), model.len());
    }
}

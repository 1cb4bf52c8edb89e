// SPDX-License-Identifier: Apache-2.0

use crate::value::Value;

/// Releases a tree and everything it owns.
///
/// Dropping a [`Value`] already frees it; this does the same teardown with an
/// explicit work stack, so trees of any depth are released without deep
/// recursion. Each value is released exactly once. `None` is a no-op.
///
/// # Returns
/// The number of values released, the root included.
pub fn free(tree: Option<Value>) -> usize {
    let Some(root) = tree else {
        return 0;
    };

    let mut released = 0;
    let mut pending = vec![root];
    while let Some(mut value) = pending.pop() {
        match &mut value {
            Value::Array(items) => pending.append(items),
            Value::Object(nodes) => pending.extend(nodes.drain(..).map(|node| node.value)),
            _ => {}
        }
        // Children have been moved out, so this drop does not recurse.
        drop(value);
        released += 1;
    }
    released
}

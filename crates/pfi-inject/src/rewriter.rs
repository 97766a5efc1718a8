//! Import injection.

use indexmap::IndexSet;
use pfi_syntax::SyntaxTree;
use std::borrow::Cow;
use tracing::debug;

/// Prepend one `import "module";` per required shim, in order.
///
/// Nothing to inject borrows the input back without allocating. Original
/// statements keep their order and node indices.
pub fn rewrite<'t>(tree: &'t SyntaxTree, required: &IndexSet<String>) -> Cow<'t, SyntaxTree> {
    if required.is_empty() {
        return Cow::Borrowed(tree);
    }

    let rewritten = tree.with_prepended_statements(|arena| {
        required
            .iter()
            .map(|module| arena.add_side_effect_import(module.as_str()))
            .collect()
    });
    debug!(
        file = tree.file_name(),
        injected = required.len(),
        "[rewrite] prepended shim imports"
    );
    Cow::Owned(rewritten)
}

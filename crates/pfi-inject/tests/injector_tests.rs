use super::*;
use crate::fixtures::{
    FileBuilder, Program, includes_registry, leading_imports, sky_core_registry,
};
use pfi_syntax::{SyntaxTree, print_tree};
use pfi_types::{NodeTypes, TypeId};
use std::borrow::Cow;

/// `s.includes(); list.includes();` with `s: string` and `list: string[]`.
fn mixed_file(program: &mut Program) -> (SyntaxTree, NodeTypes) {
    let strings = program.array_of(TypeId::STRING);
    let mut file = FileBuilder::new();
    file.call_member("s", Some(TypeId::STRING), "includes");
    file.call_member("list", Some(strings), "includes");
    file.finish("mixed.ts")
}

#[test]
fn union_receiver_injects_each_shim_once() {
    let mut program = Program::new();
    let strings = program.array_of(TypeId::STRING);
    let union = program.table.union(&[TypeId::STRING, strings]);
    let mut file = FileBuilder::new();
    file.call_member("value", Some(union), "includes");
    file.call_member("value", Some(union), "includes");
    let (tree, types) = file.finish("main.ts");

    let oracle = program.table.with_node_types(&types);
    let out = PolyfillInjector::new(includes_registry()).transform(&tree, &oracle);
    let mut injected = leading_imports(&out);
    injected.sort();
    assert_eq!(injected, ["A", "S"]);
    assert_eq!(out.statements().len(), tree.statements().len() + 2);
}

#[test]
fn no_registered_member_returns_input_unchanged() {
    let program = Program::new();
    let mut file = FileBuilder::new();
    file.import("lodash");
    file.call_member("s", Some(TypeId::STRING), "trim");
    let (tree, types) = file.finish("main.ts");

    let oracle = program.table.with_node_types(&types);
    let out = PolyfillInjector::new(sky_core_registry()).transform(&tree, &oracle);
    assert!(matches!(out, Cow::Borrowed(borrowed) if std::ptr::eq(borrowed, &tree)));
    assert_eq!(*out, tree);
}

#[test]
fn imports_precede_original_statements_in_first_use_order() {
    let mut program = Program::new();
    let (tree, types) = mixed_file(&mut program);
    let original = tree.statements().to_vec();

    let oracle = program.table.with_node_types(&types);
    let out = PolyfillInjector::new(includes_registry()).transform(&tree, &oracle);
    assert_eq!(leading_imports(&out), ["S", "A"]);
    assert_eq!(&out.statements()[2..], original.as_slice());
    assert_eq!(
        print_tree(&out),
        "import \"S\";\nimport \"A\";\ns.includes();\nlist.includes();\n"
    );
}

#[test]
fn second_application_adds_nothing() {
    let mut program = Program::new();
    let (tree, types) = mixed_file(&mut program);
    let oracle = program.table.with_node_types(&types);
    let injector = PolyfillInjector::new(includes_registry());

    let once = injector.transform(&tree, &oracle).into_owned();
    let twice = injector.transform(&once, &oracle);
    assert!(matches!(twice, Cow::Borrowed(_)));
    assert_eq!(print_tree(&twice), print_tree(&once));
}

#[test]
fn input_tree_is_not_mutated() {
    let mut program = Program::new();
    let (tree, types) = mixed_file(&mut program);
    let before = tree.clone();

    let oracle = program.table.with_node_types(&types);
    let out = PolyfillInjector::new(includes_registry()).transform(&tree, &oracle);
    assert!(matches!(out, Cow::Owned(_)));
    assert_eq!(tree, before);
}

#[test]
fn any_receiver_injects_every_candidate() {
    let program = Program::new();
    let mut file = FileBuilder::new();
    file.call_member("anything", Some(TypeId::ANY), "at");
    let (tree, types) = file.finish("main.ts");

    let oracle = program.table.with_node_types(&types);
    let out = PolyfillInjector::new(sky_core_registry()).transform(&tree, &oracle);
    assert_eq!(
        leading_imports(&out),
        [
            "sky-core/polyfill/Array/prototype/at",
            "sky-core/polyfill/String/prototype/at",
        ]
    );
}

#[test]
fn outcome_reports_sites_and_injections() {
    let mut program = Program::new();
    let (tree, types) = mixed_file(&mut program);
    let oracle = program.table.with_node_types(&types);

    let injector = PolyfillInjector::new(includes_registry());
    let result = injector.transform_with_outcome(&tree, &oracle);
    assert_eq!(
        result.outcome,
        InjectionOutcome {
            file_name: "mixed.ts".to_string(),
            injected: vec!["S".to_string(), "A".to_string()],
            sites_inspected: 2,
        }
    );
    assert!(!result.outcome.is_unchanged());
}

#[test]
fn free_function_matches_injector() {
    let mut program = Program::new();
    let (tree, types) = mixed_file(&mut program);
    let oracle = program.table.with_node_types(&types);
    let registry = includes_registry();

    let direct = inject_polyfills(&tree, &oracle, &registry);
    let via_injector = PolyfillInjector::new(registry.clone()).transform(&tree, &oracle);
    assert_eq!(*direct, *via_injector);
}

#[test]
fn from_options_uses_polluting_registry() {
    let options = PluginOptions {
        polluting: includes_registry(),
    };
    let injector = PolyfillInjector::from_options(options);
    assert_eq!(injector.registry(), &includes_registry());
}

#[test]
fn batch_keeps_order_and_isolates_files() {
    let mut program = Program::new();
    let strings = program.array_of(TypeId::STRING);

    // The first file already imports "S"; that must not affect the second.
    let mut first = FileBuilder::new();
    first.import("S");
    first.call_member("s", Some(TypeId::STRING), "includes");
    let (first_tree, first_types) = first.finish("first.ts");

    let mut second = FileBuilder::new();
    second.call_member("s", Some(TypeId::STRING), "includes");
    let (second_tree, second_types) = second.finish("second.ts");

    let mut third = FileBuilder::new();
    third.call_member("list", Some(strings), "includes");
    let (third_tree, third_types) = third.finish("third.ts");

    let units = [
        SourceUnit {
            tree: &first_tree,
            oracle: program.table.with_node_types(&first_types),
        },
        SourceUnit {
            tree: &second_tree,
            oracle: program.table.with_node_types(&second_types),
        },
        SourceUnit {
            tree: &third_tree,
            oracle: program.table.with_node_types(&third_types),
        },
    ];
    let results = PolyfillInjector::new(includes_registry()).inject_all(&units);

    let summary: Vec<(&str, Vec<&str>)> = results
        .iter()
        .map(|file| {
            (
                file.outcome.file_name.as_str(),
                file.outcome.injected.iter().map(String::as_str).collect(),
            )
        })
        .collect();
    let expected: Vec<(&str, Vec<&str>)> = vec![
        ("first.ts", vec![]),
        ("second.ts", vec!["S"]),
        ("third.ts", vec!["A"]),
    ];
    assert_eq!(summary, expected);
    assert!(matches!(results[0].tree, Cow::Borrowed(_)));
    assert_eq!(leading_imports(&results[2].tree), ["A"]);
}

//! Injection pass benchmarks.
//!
//! Measures collection plus rewrite over synthetic files with many member
//! sites, and the parallel batch API over many such files.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use polyfill_injector::syntax::{NodeArena, node_flags};
use polyfill_injector::types::{NodeTypes, SymbolFlags, TypeId};
use polyfill_injector::{PolyfillInjector, ShimRegistry, SourceUnit, SyntaxTree, TypeTable};

const REGISTRY: &str = r#"{
    "at": { "Array": "shim/array-at", "String": "shim/string-at" },
    "includes": { "Array": "shim/array-includes", "String": "shim/string-includes" },
    "finally": { "Promise": "shim/promise-finally" },
    "toJSON": { "Date": "shim/date-to-json" }
}"#;

const MEMBERS: [&str; 5] = ["at", "includes", "finally", "toJSON", "trim"];

struct Fixture {
    table: TypeTable,
    receivers: Vec<TypeId>,
}

fn fixture() -> Fixture {
    let mut table = TypeTable::new();
    let lib = table.add_file("lib.es2022.d.ts", true);
    let user = table.add_file("app.ts", false);
    let array = table.declare("Array", SymbolFlags::INTERFACE, lib);
    let promise = table.declare("Promise", SymbolFlags::INTERFACE, lib);
    let date = table.declare("Date", SymbolFlags::INTERFACE, lib);

    let strings = table.reference(array, &[TypeId::STRING]);
    let task = table.reference(promise, &[TypeId::VOID]);
    let date_ty = table.reference(date, &[]);

    // A user class three levels above Date, to exercise the base type walk.
    let mut derived = date_ty;
    for name in ["Stamp", "LocalStamp", "ZonedStamp"] {
        let symbol = table.declare(name, SymbolFlags::CLASS, user);
        table.set_symbol_base_types(symbol, vec![derived]);
        derived = table.reference(symbol, &[]);
    }
    let mixed = table.union(&[TypeId::STRING, strings, TypeId::UNDEFINED]);

    Fixture {
        table,
        receivers: vec![TypeId::STRING, strings, task, derived, mixed, TypeId::ANY],
    }
}

/// `function fN() { recv.member(); ... }` blocks totalling `sites` calls.
fn build_file(fixture: &Fixture, name: &str, sites: usize) -> (SyntaxTree, NodeTypes) {
    let mut arena = NodeArena::new();
    let mut types = NodeTypes::new();
    let mut statements = Vec::new();
    let mut body = Vec::new();

    for site in 0..sites {
        let receiver = arena.add_identifier(format!("v{site}"));
        types.set(receiver, fixture.receivers[site % fixture.receivers.len()]);
        let access = arena.add_property_access(receiver, MEMBERS[site % MEMBERS.len()]);
        let call = arena.add_call(access, vec![]);
        body.push(arena.add_expression_statement(call));

        if body.len() == 16 {
            let block = arena.add_block(std::mem::take(&mut body));
            statements.push(arena.add_function_declaration(format!("f{site}"), vec![], block));
        }
    }
    if !body.is_empty() {
        let block = arena.add_block(body);
        statements.push(arena.add_function_declaration("rest", vec![], block));
    }
    let init = arena.add_numeric_literal("0");
    let name_idx = arena.add_identifier("done");
    statements.push(arena.add_variable_statement(node_flags::CONST, name_idx, init));

    let root = arena.add_source_file(name, statements);
    (SyntaxTree::new(arena, root), types)
}

fn bench_transform(c: &mut Criterion) {
    let fixture = fixture();
    let injector = PolyfillInjector::new(ShimRegistry::from_json_str(REGISTRY).unwrap());
    let mut group = c.benchmark_group("transform");

    for sites in [100usize, 1_000, 10_000] {
        let (tree, types) = build_file(&fixture, "bench.ts", sites);
        let oracle = fixture.table.with_node_types(&types);
        group.throughput(Throughput::Elements(sites as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sites), &tree, |b, tree| {
            b.iter(|| black_box(injector.transform(black_box(tree), &oracle)));
        });
    }

    group.finish();
}

fn bench_no_op(c: &mut Criterion) {
    let fixture = fixture();
    let (tree, types) = build_file(&fixture, "bench.ts", 5_000);
    let oracle = fixture.table.with_node_types(&types);
    let registry = ShimRegistry::new().with_shim("padStart", "String", "shim");
    let injector = PolyfillInjector::new(registry);

    c.bench_function("transform_no_match", |b| {
        b.iter(|| black_box(injector.transform(black_box(&tree), &oracle)));
    });
}

fn bench_inject_all(c: &mut Criterion) {
    let fixture = fixture();
    let injector = PolyfillInjector::new(ShimRegistry::from_json_str(REGISTRY).unwrap());
    let files: Vec<(SyntaxTree, NodeTypes)> = (0..64)
        .map(|i| build_file(&fixture, &format!("file{i}.ts"), 500))
        .collect();
    let units: Vec<_> = files
        .iter()
        .map(|(tree, types)| SourceUnit {
            tree,
            oracle: fixture.table.with_node_types(types),
        })
        .collect();

    let mut group = c.benchmark_group("inject_all");
    group.throughput(Throughput::Elements(units.len() as u64));
    group.bench_function("64_files", |b| {
        b.iter(|| black_box(injector.inject_all(black_box(&units))));
    });
    group.finish();
}

criterion_group!(benches, bench_transform, bench_no_op, bench_inject_all);
criterion_main!(benches);

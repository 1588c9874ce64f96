use criterion::{criterion_group, criterion_main, Criterion};
use overlay_shell::palette::{Command, CommandCategory, CommandPalette};

const CATEGORIES: [CommandCategory; 4] = [
    CommandCategory::Window,
    CommandCategory::Appearance,
    CommandCategory::Navigation,
    CommandCategory::Editor,
];

fn bench_search(c: &mut Criterion) {
    let commands: Vec<Command> = (0..10_000)
        .map(|i| {
            Command::new(
                &format!("item-{i}"),
                &format!("Item {i}"),
                CATEGORIES[i % CATEGORIES.len()],
                || async { Ok(()) },
            )
        })
        .collect();
    let palette = CommandPalette::new(commands);
    c.bench_function("palette_search_10k", |b| b.iter(|| palette.search("Item 9999")));
    c.bench_function("palette_groups_10k", |b| b.iter(|| palette.groups()));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);

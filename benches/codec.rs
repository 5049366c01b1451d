//! Benchmarks for the delimited-text codec and grid load
//!
//! Run with: cargo bench codec

use tablet::config::GridConfig;
use tablet::csv::{parse, serialize, Delimiter};
use tablet::messages::{DocumentMsg, Msg};
use tablet::model::GridModel;
use tablet::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample(rows: usize) -> String {
    let mut text = String::from("id,name,notes,amount\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{i},name {i},\"see [[page {i}]], then \"\"more\"\"\",{}.5\n",
            i * 3
        ));
    }
    text
}

// ============================================================================
// Codec
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn parse_rows(bencher: divan::Bencher, rows: usize) {
    let text = sample(rows);
    bencher.bench(|| parse(divan::black_box(&text), Delimiter::Comma));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn serialize_rows(bencher: divan::Bencher, rows: usize) {
    let table = parse(&sample(rows), Delimiter::Comma);
    bencher.bench(|| serialize(divan::black_box(&table)));
}

// ============================================================================
// Grid load (parse + materialize + render requests)
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn load_grid(bencher: divan::Bencher, rows: usize) {
    let text = sample(rows);
    bencher.bench(|| {
        let mut model = GridModel::new(GridConfig::default());
        let cmd = update(
            &mut model,
            Msg::Document(DocumentMsg::Load {
                text: text.clone(),
                source_path: "bench.csv".into(),
                delimiter: None,
            }),
        );
        divan::black_box((model, cmd))
    });
}

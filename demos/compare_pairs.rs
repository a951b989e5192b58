use cospectra::builder::{ComparatorBuilder, ErrorPolicy};
use cospectra::catalog::all_pairs;
use cospectra::error::Result;
use cospectra::layout::Layout;
use cospectra::report::{Locale, ReportSink, WriterSink};

fn main() -> Result<()> {
    env_logger::init();

    let comparator = ComparatorBuilder::new()
        .with_policy(ErrorPolicy::Lenient)
        .with_parallel(true)
        .build()?;
    let mut sink = WriterSink::new(std::io::stdout(), Locale::Italian);

    for pair in all_pairs() {
        // =====================
        // 1. Spectral comparison
        // =====================
        let report = comparator.compare_named(pair.name, &pair.left, &pair.right)?;
        sink.emit(&report)?;

        for entry in report.iter() {
            if let (Some(l), Some(r)) = (&entry.left, &entry.right) {
                println!("  {:<20} G1={}  G2={}", entry.representation.name(), l, r);
            }
        }

        // =====================
        // 2. Layout for a plotting backend
        // =====================
        let request = pair
            .render_request()
            .with_layout(Layout::Spring { iterations: 100, seed: 42 });
        let (left, right) = request.positions();
        println!("  {}: {}", request.titles.0, pair.left);
        for (v, p) in left.iter().enumerate() {
            println!("    v{} -> ({:+.3}, {:+.3})", v, p.x, p.y);
        }
        println!("  {}: {}", request.titles.1, pair.right);
        for (v, p) in right.iter().enumerate() {
            println!("    v{} -> ({:+.3}, {:+.3})", v, p.x, p.y);
        }
    }
    Ok(())
}

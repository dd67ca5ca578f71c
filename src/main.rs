use replace_bench::{BenchOptions, Benchmark};

fn main() {
    env_logger::init();

    let result = Benchmark::new(BenchOptions::default())
        .and_then(|bench| bench.run(std::io::stdout().lock()));
    if let Err(err) = result {
        log::error!("benchmark aborted: {}", err);
        std::process::exit(1);
    }
}

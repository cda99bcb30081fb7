use clap::Parser;
use range_bucket_sort::{SortConfig, SortSession};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Run a timed parallel bucket sort over seeded random `u32` keys.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of keys to generate
    #[arg(short = 'n', long, default_value_t = 4_000_000)]
    len: usize,

    /// Number of range buckets (B)
    #[arg(short = 'b', long, default_value_t = 16)]
    buckets: usize,

    /// Worker threads (default: derived from available cores)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Sort the buckets on a single thread
    #[arg(long, default_value_t = false)]
    single: bool,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Arrays at or below this length are echoed in hex around each phase.
const PRINT_LIMIT: usize = 100;

// Hex makes the range split visible: with B=2 bucket 0 holds keys whose
// leading digit is 0-7 and bucket 1 those with 8-f.
fn print_values(msg: &str, values: &[u32]) {
    if values.len() > PRINT_LIMIT {
        return;
    }
    eprintln!("[bsort] {msg}");
    let line: Vec<String> = values.iter().map(|v| format!("{v:08x}")).collect();
    eprintln!("  {}", line.join(" "));
}

fn print_buckets(msg: &str, session: &SortSession) {
    if session.values().len() > PRINT_LIMIT {
        return;
    }
    eprintln!("[bsort] {msg}");
    for b in 0..session.bucket_count() {
        let line: Vec<String> = session.bucket(b).iter().map(|v| format!("{v:08x}")).collect();
        eprintln!("  bucket {b}: {}", line.join(" "));
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let values: Vec<u32> = (0..args.len).map(|_| rng.gen()).collect();

    let mut cfg = SortConfig::default()
        .with_buckets(args.buckets)
        .multithreaded(!args.single);
    if let Some(t) = args.threads {
        cfg = cfg.threads(t);
    }

    let mut session = SortSession::new(values, &cfg)?;
    eprintln!(
        "[bsort] len={} buckets={} threads={}",
        args.len,
        args.buckets,
        session.threads()
    );

    print_values("before partition", session.values());
    let start = Instant::now();

    session.partition()?;
    let t_partition = start.elapsed();
    print_buckets("after partition", &session);

    session.sort_buckets()?;
    let t_sort = start.elapsed() - t_partition;
    print_buckets("after sort", &session);

    session.recombine()?;
    let total = start.elapsed();
    print_values("after recombine", session.values());

    let sorted = session.values().windows(2).all(|w| w[0] <= w[1]);
    anyhow::ensure!(sorted, "output array is not sorted");

    eprintln!(
        "[bsort] partition {:.3?}, sort {:.3?}, total {:.3?} for {} keys",
        t_partition,
        t_sort,
        total,
        args.len
    );
    Ok(())
}

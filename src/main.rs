use argh::FromArgs;
use dsforest::UnionFind;
use dsforest::graph::{Edge, connected_components, minimum_spanning_forest};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::error::Error;

/// Runs disjoint-set forest demos
#[derive(Debug, FromArgs)]
struct Args {
    /// name of the demo to run
    #[argh(option, short = 'd', default = "String::from(\"scenario\")")]
    demo: String,

    /// universe size for the `random` demo
    #[argh(option, short = 'n', default = "16")]
    size: usize,

    /// seed for the `random` demo
    #[argh(option, short = 's', default = "0")]
    seed: u64,

    /// list registered demos and exit
    #[argh(switch, short = 'l')]
    list: bool,
}

type DemoFn = fn(&Args) -> Result<(), Box<dyn Error>>;

// Demos are registered here, not discovered at runtime.
const DEMOS: &[(&str, &str, DemoFn)] = &[
    ("scenario", "merge a few pairs in a universe of 10", scenario),
    ("components", "label connected components of a small graph", components),
    ("kruskal", "minimum spanning tree of a weighted graph", kruskal),
    ("random", "merge random pairs until one set remains", random),
];

fn scenario(_: &Args) -> Result<(), Box<dyn Error>> {
    let mut uf = UnionFind::new(10);
    println!("{} sets", uf.set_count());
    for (a, b) in [(0, 1), (2, 3), (0, 3), (0, 1)] {
        let root = uf.unify(a, b)?;
        println!("unify({a}, {b}) -> root {root}, {} sets", uf.set_count());
    }
    println!("connected(1, 2) = {}", uf.connected(1, 2)?);
    println!("connected(1, 9) = {}", uf.connected(1, 9)?);
    println!("partition: {:?}", uf.sets());
    Ok(())
}

fn components(_: &Args) -> Result<(), Box<dyn Error>> {
    let edges = [(0, 1), (1, 2), (3, 4), (5, 6), (6, 7), (7, 5)];
    let components = connected_components(9, &edges)?;
    println!("{} components", components.count());
    for (label, group) in components.groups().iter().enumerate() {
        println!("  #{label}: {group:?}");
    }
    Ok(())
}

fn kruskal(_: &Args) -> Result<(), Box<dyn Error>> {
    let edges = [
        Edge::new(0, 1, 4),
        Edge::new(0, 7, 8),
        Edge::new(1, 2, 8),
        Edge::new(1, 7, 11),
        Edge::new(2, 3, 7),
        Edge::new(2, 8, 2),
        Edge::new(2, 5, 4),
        Edge::new(3, 4, 9),
        Edge::new(3, 5, 14),
        Edge::new(4, 5, 10),
        Edge::new(5, 6, 2),
        Edge::new(6, 7, 1),
        Edge::new(6, 8, 6),
        Edge::new(7, 8, 7),
    ];
    let forest = minimum_spanning_forest(9, &edges)?;
    for edge in forest.edges() {
        println!("  {edge}");
    }
    println!(
        "total weight {}, spanning tree: {}",
        forest.total_weight(),
        forest.is_spanning_tree()
    );
    Ok(())
}

fn random(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut uf = UnionFind::new(args.size);
    if uf.is_empty() {
        println!("empty universe, nothing to merge");
        return Ok(());
    }

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut attempts = 0usize;
    while uf.set_count() > 1 {
        let a = rng.random_range(0..args.size);
        let b = rng.random_range(0..args.size);
        uf.unify(a, b)?;
        attempts += 1;
    }
    let root = uf.find(0)?;
    println!(
        "{} elements merged into one set after {attempts} unify calls (root {root}, rank {})",
        args.size,
        uf.rank_of(root)?
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    if args.list {
        for (name, description, _) in DEMOS {
            println!("{name:12} {description}");
        }
        return Ok(());
    }

    let Some((name, _, run)) = DEMOS.iter().find(|(name, _, _)| *name == args.demo) else {
        let names: Vec<&str> = DEMOS.iter().map(|(name, _, _)| *name).collect();
        return Err(format!("unknown demo `{}`, expected one of {names:?}", args.demo).into());
    };

    log::info!("running demo `{name}`");
    run(&args).inspect_err(|error| log::error!("demo `{name}` failed: {error}"))
}

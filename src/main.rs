use clap::{Parser, ValueEnum};
use classic_collections::avl_tree::AvlTree;
use classic_collections::bst::BinarySearchTree;
use log::{info, LevelFilter};
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::error;
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Structure {
    Avl,
    Bst,
}

#[derive(Parser)]
#[command(name = "classic-collections")]
#[command(about = "Exercises an ordered container with shuffled keys")]
struct Args {
    #[arg(long, default_value = "100000")]
    size: u32,

    #[arg(long, default_value = "1")]
    seed: u32,

    #[arg(long, value_enum, default_value = "avl")]
    structure: Structure,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

trait TreeOps<T> {
    fn insert(&mut self, value: T);
    fn contains(&self, value: &T) -> bool;
    fn remove(&mut self, value: &T) -> bool;
    fn len(&self) -> usize;
    fn height(&self) -> usize;
}

impl TreeOps<u32> for AvlTree<u32> {
    fn insert(&mut self, value: u32) {
        AvlTree::insert(self, value);
    }

    fn contains(&self, value: &u32) -> bool {
        AvlTree::contains(self, value)
    }

    fn remove(&mut self, value: &u32) -> bool {
        AvlTree::remove(self, value)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn height(&self) -> usize {
        AvlTree::height(self)
    }
}

impl TreeOps<u32> for BinarySearchTree<u32> {
    fn insert(&mut self, value: u32) {
        BinarySearchTree::insert(self, value);
    }

    fn contains(&self, value: &u32) -> bool {
        BinarySearchTree::contains(self, value)
    }

    fn remove(&mut self, value: &u32) -> bool {
        BinarySearchTree::remove(self, value)
    }

    fn len(&self) -> usize {
        BinarySearchTree::len(self)
    }

    // counts nodes rather than edges so both trees report the same number
    fn height(&self) -> usize {
        BinarySearchTree::height(self).map_or(0, |height| height + 1)
    }
}

fn run(tree: &mut dyn TreeOps<u32>, keys: &[u32]) {
    let start = Instant::now();
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(tree.len(), i);
        tree.insert(*key);
    }
    let inserted = Instant::now();
    info!("inserted {} keys, height is {}", tree.len(), tree.height());

    for key in keys {
        assert!(tree.contains(key));
    }
    let checked_contains = Instant::now();

    for key in keys {
        assert!(tree.remove(key));
    }
    let end = Instant::now();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);

    info!(
        "inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    info!(
        "checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    info!(
        "removals took {} seconds",
        end.saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    info!(
        "total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut rng: XorShiftRng = SeedableRng::from_seed([args.seed, args.seed ^ 0x9e37_79b9, 1, 1]);
    let mut keys: Vec<u32> = (0..args.size).collect();
    rng.shuffle(&mut keys);

    info!(
        "running with {:?} tree and {} shuffled keys (seed {})",
        args.structure, args.size, args.seed
    );

    match args.structure {
        Structure::Avl => run(&mut AvlTree::<u32>::new(), &keys),
        Structure::Bst => run(&mut BinarySearchTree::<u32>::new(), &keys),
    }
    Ok(())
}

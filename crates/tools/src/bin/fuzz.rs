use anyhow::{Result, bail};
use clap::Parser;
use dungeon::{CellKind, Dungeon, GenerationError, MAX_GRID_SIZE, MIN_GRID_SIZE, Pos, generate};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
}

fn choose_size(rng: &mut ChaCha8Rng) -> usize {
    let span = (MAX_GRID_SIZE - MIN_GRID_SIZE + 1) as u64;
    MIN_GRID_SIZE + (rng.next_u64() % span) as usize
}

fn check_invariants(dungeon: &Dungeon) -> Result<(), String> {
    let size = dungeon.size();
    let last = size as i32 - 1;
    let goal = dungeon.goal;

    if dungeon.grid.count_kind(CellKind::Goal) != 1 {
        return Err("Invariant failed: goal count != 1".to_string());
    }
    let on_row_edge = goal.x == 0 || goal.x == last;
    let on_col_edge = goal.y == 0 || goal.y == last;
    if on_row_edge == on_col_edge {
        return Err(format!("Invariant failed: goal {goal:?} is a corner or interior cell"));
    }

    for cell in dungeon.grid.cells() {
        let Pos { x, y } = cell.pos();
        if dungeon.grid.is_edge_of_grid(x, y) && cell.pos() != goal && cell.kind() != CellKind::Edge
        {
            let kind = cell.kind();
            return Err(format!("Invariant failed: border cell {:?} is {kind:?}", cell.pos()));
        }
    }

    if dungeon.kind_at(dungeon.player_spawn) != Some(CellKind::Spawn) {
        return Err("Invariant failed: player does not start on a spawn cell".to_string());
    }

    let half = size / 2;
    for guard in &dungeon.guards {
        let far = (guard.x.abs_diff(goal.x) as usize) >= half
            || (guard.y.abs_diff(goal.y) as usize) >= half;
        if !far {
            return Err(format!("Invariant failed: guard {guard:?} too close to goal {goal:?}"));
        }
        if !dungeon.kind_at(*guard).is_some_and(CellKind::is_walkable) {
            return Err(format!("Invariant failed: guard {guard:?} is not on floor"));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut aborted = 0_u32;
    for run in 0..args.runs {
        let size = choose_size(&mut rng);
        let seed = rng.next_u64();
        match generate(size, seed) {
            Ok(dungeon) => {
                if let Err(message) = check_invariants(&dungeon) {
                    bail!("{message} (run={run}, size={size}, seed={seed})");
                }
            }
            Err(GenerationError::NoQualifyingGuardSite { .. }) => aborted += 1,
            Err(other) => bail!("Unexpected error {other} (run={run}, size={size}, seed={seed})"),
        }
    }

    println!("Fuzz harness completed: {} runs, {aborted} aborted without a guard site", args.runs);
    Ok(())
}

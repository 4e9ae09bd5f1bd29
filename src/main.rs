//! tricube - CLI Entry Point
//!
//! Commands:
//! - `tricube exec <OP> <coords>...` - Run one operation on a fresh grid
//! - `tricube run <script>` - Run an operation script
//! - `tricube demo` - Walk through every operation
//! - `tricube test` - Built-in self-test

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tricube")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "A 4x4x4 ternary processor simulator")]
struct Cli {
    /// Seed for the grid RNG (overrides the config file)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a single operation on a freshly randomized grid
    Exec {
        /// Operation identifier (NOT, AND, ..., MULTI_ADD)
        op: String,
        /// Coordinates as x,y,z: operand1 [operand2] result
        #[arg(num_args = 2..=3, allow_hyphen_values = true)]
        coords: Vec<String>,
        /// Print the grid as JSON afterwards
        #[arg(short, long)]
        json: bool,
    },
    /// Run an operation script
    Run {
        /// Path to the script file
        script: String,
        /// Print every description as it is produced
        #[arg(short, long)]
        trace: bool,
        /// Print the final grid as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Walk through every operation on a seeded grid
    Demo,
    /// Run the built-in self-test
    Test,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.seed);

    match cli.command {
        Some(Commands::Exec { op, coords, json }) => {
            exec_operation(&config, &op, &coords, json);
        }
        Some(Commands::Run { script, trace, json }) => {
            run_script(&config, &script, trace, json);
        }
        Some(Commands::Demo) => {
            demo_operations();
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("tricube v0.1.0");
            println!("A 4x4x4 ternary processor simulator");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_operations();
        }
    }
}

fn load_config(path: Option<&str>, seed: Option<u64>) -> tricube::EngineConfig {
    use tricube::EngineConfig;

    let mut config = match path {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    if seed.is_some() {
        config.seed = seed;
    }
    config
}

fn exec_operation(config: &tricube::EngineConfig, name: &str, coords: &[String], json: bool) {
    use tricube::{Coord, Engine, Operation};

    let op: Operation = match name.parse() {
        Ok(op) => op,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut parsed = Vec::with_capacity(coords.len());
    for text in coords {
        match text.parse::<Coord>() {
            Ok(c) => parsed.push(c),
            Err(e) => {
                eprintln!("❌ Bad coordinate '{}': {}", text, e);
                std::process::exit(1);
            }
        }
    }

    let expected = if op.uses_second_operand() { 3 } else { 2 };
    if parsed.len() != expected {
        eprintln!("❌ {} takes {} coordinates, got {}", op, expected, parsed.len());
        std::process::exit(1);
    }
    let operand1 = parsed[0];
    let operand2 = if expected == 3 { parsed[1] } else { operand1 };
    let result = parsed[expected - 1];

    let mut engine = Engine::new(config);
    match engine.step(op, operand1, operand2, result) {
        Ok(desc) => println!("{}", desc),
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    if json {
        print_grid_json(engine.grid());
    }
}

fn run_script(config: &tricube::EngineConfig, path: &str, trace: bool, json: bool) {
    use tricube::{parse_script, Engine};

    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Failed to read file: {}", e);
            std::process::exit(1);
        }
    };

    let commands = match parse_script(&source) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("❌ Script error: {}", e);
            std::process::exit(1);
        }
    };

    println!("📝 Parsed {} commands from {}", commands.len(), path);

    let mut engine = Engine::new(config);
    for (i, cmd) in commands.iter().enumerate() {
        match cmd.apply(&mut engine) {
            Ok(Some(desc)) if trace => println!("{:03}: {}", i, desc),
            Ok(_) => {}
            Err(e) => {
                eprintln!("❌ Command {} failed: {}", i, e);
                std::process::exit(1);
            }
        }
    }

    println!();
    println!("━━━ Operation Log ━━━");
    if engine.log().is_empty() {
        println!("(empty)");
    }
    for entry in engine.log().iter() {
        println!("{}", entry);
    }
    println!();
    println!("Steps: {}", engine.steps());

    if json {
        print_grid_json(engine.grid());
    }
}

fn print_grid_json(grid: &tricube::TritGrid) {
    match serde_json::to_string(grid) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("❌ Failed to serialize grid: {}", e);
            std::process::exit(1);
        }
    }
}

fn demo_operations() {
    use tricube::{Coord, Engine, EngineConfig, Operation, Row, TritGrid};

    println!("━━━ Ternary Operation Demo ━━━");
    println!();

    let mut engine = Engine::with_grid(TritGrid::zeroed(), &EngineConfig::default());
    let a = Coord::new(0, 0, 0);
    let b = Coord::new(1, 0, 0);
    let r = Coord::new(2, 0, 0);

    // Fixed operands so every line of output is reproducible.
    let seeds = [(2, 1), (0, 2), (2, 2)];
    for (va, vb) in seeds {
        let grid = engine.grid_mut();
        grid.set(a, va).unwrap();
        grid.set(b, vb).unwrap();

        println!("Operands a={} b={}:", va, vb);
        for op in Operation::ALL {
            if op == Operation::MultiAdd {
                continue;
            }
            match engine.step(op, a, b, r) {
                Ok(desc) => println!("  {}", desc),
                Err(e) => println!("  {} failed: {}", op, e),
            }
            // ADD/SUB spill into x = 3; restore operands for the next op.
            let grid = engine.grid_mut();
            grid.set(a, va).unwrap();
            grid.set(b, vb).unwrap();
        }
        println!();
    }

    println!("Multi-trit addition (least significant digit first):");
    let row_a = Row::from_digits([2, 1, 0, 2]);
    let row_b = Row::from_digits([1, 2, 2, 1]);
    let grid = engine.grid_mut();
    grid.write_row(Coord::new(0, 1, 0), &row_a).unwrap();
    grid.write_row(Coord::new(0, 2, 0), &row_b).unwrap();
    println!("  A = {:?}", row_a);
    println!("  B = {:?}", row_b);
    match engine.step(Operation::MultiAdd, Coord::new(0, 1, 0), Coord::new(0, 2, 0), Coord::new(0, 3, 0)) {
        Ok(desc) => println!("  {}", desc),
        Err(e) => println!("  MULTI_ADD failed: {}", e),
    }
    println!();

    println!("✓ Core ternary operations working!");
}

fn run_self_test() {
    use tricube::{Coord, Engine, EngineConfig, Operation, Row, Trit, TritGrid};
    use tricube::ternary::alu;

    println!("━━━ tricube Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: NOT involution
    print!("NOT involution... ");
    if Trit::ALL.iter().all(|&t| alu::not(alu::not(t)) == t) {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 2: CYCLE has order three
    print!("CYCLE order three... ");
    if Trit::ALL.iter().all(|&t| alu::cycle(alu::cycle(alu::cycle(t))) == t) {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 3: XOR associativity
    print!("XOR associativity... ");
    let mut ok = true;
    for a in Trit::ALL {
        for b in Trit::ALL {
            for c in Trit::ALL {
                if alu::xor(a, alu::xor(b, c)) != alu::xor(alu::xor(a, b), c) {
                    ok = false;
                }
            }
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: Single-digit carry
    print!("ADD 2 + 2 carry... ");
    let (digit, carry) = alu::add(Trit::High, Trit::High, Trit::Low);
    if (digit, carry) == (Trit::Mid, Trit::Mid) {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {} carry {}, expected 1 carry 1)", digit, carry);
        failed += 1;
    }

    // Test 5: Ripple-carry row addition
    print!("MULTI_ADD ripple carry... ");
    let (sum, overflow) = alu::add_rows(&Row::from_digits([2, 1, 0, 2]), &Row::from_digits([1, 2, 2, 1]));
    if sum.digits() == [0, 1, 0, 1] && overflow == Trit::Mid {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {:?} overflow {}, expected [0, 1, 0, 1] overflow 1)", sum.digits(), overflow);
        failed += 1;
    }

    // Test 6: Bounds checking
    print!("Out-of-range coordinates rejected... ");
    let grid = TritGrid::zeroed();
    if grid.get(Coord::new(4, 0, 0)).is_err() && grid.get(Coord::new(0, -1, 0)).is_err() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 7: Log window
    print!("Operation log keeps last 6... ");
    let mut engine = Engine::new(&EngineConfig { seed: Some(0), ..EngineConfig::default() });
    let origin = Coord::new(0, 0, 0);
    for _ in 0..10 {
        engine.step(Operation::Cycle, origin, origin, origin).unwrap();
    }
    if engine.log().len() == 6 {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {})", engine.log().len());
        failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}

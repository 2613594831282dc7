use chained_buckets::{HashTable, TableConfig, TableError};
use log::info;
use std::time::Instant;

fn demo() -> Result<(), TableError> {
    let mut h: HashTable = HashTable::new(8, 4)?;

    h.add(2, 20)?;
    h.add(3, 30)?;
    h.add(25, 100)?;
    h.add(35, 150)?;

    print!("{}", h);

    println!("Value for key 3 is: {:?}", h.retrieve(3));

    h.delete(3)?;

    println!("Value for key 3 after deletion is: {:?}", h.retrieve(3));

    print!("{}", h);
    Ok(())
}

fn workload() -> Result<(), TableError> {
    const CAPACITY: usize = 1024;
    const SAMPLE_SIZE: usize = 1000000;

    let samples: Vec<i64> = (0..SAMPLE_SIZE).map(|_| rand::random::<i64>()).collect();

    let mut h: HashTable = HashTable::with_config(TableConfig::new(CAPACITY, 4))?;

    let now: Instant = Instant::now();
    for &key in &samples {
        h.add(key, key)?;
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    println!("Initial capacity {} actual capacity {}", CAPACITY, h.capacity());
    println!("Initial entries {} actual entries {}", SAMPLE_SIZE, h.len());
    println!("Load factor {}", h.load_factor());
    println!("Avg time to insert {}", elapsed as f64 / SAMPLE_SIZE as f64);

    benchmarking::warm_up();
    let lookups = benchmarking::measure_function(|measurer| {
        for &key in &samples {
            measurer.measure(|| h.retrieve(key));
        }
    });
    match lookups {
        Ok(result) => println!("Avg time to lookup {:?}", result.elapsed()),
        Err(e) => println!("Lookup benchmark failed: {:?}", e),
    }

    let now: Instant = Instant::now();
    for &key in &samples {
        h.delete(key)?;
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    println!("Initial capacity {} actual capacity {}", CAPACITY, h.capacity());
    println!("Initial entries {} actual entries {}", SAMPLE_SIZE, h.len());
    println!("Avg time to delete {}", elapsed as f64 / SAMPLE_SIZE as f64);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = demo().and_then(|_| workload()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    info!("done");
}

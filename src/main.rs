//! gov binary entry point.

fn main() {
    if let Err(err) = gov::cli::run() {
        println!("{err:#}");
        std::process::exit(1);
    }
}

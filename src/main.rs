mod config;

mod errors;

mod init;

mod leaderboard;

mod submission;

mod task_dir;

fn main() {
    // Every failure surfaces as a single stdout line and a non-zero status.
    if let Err(error) = init::main() {
        println!("Error: {error:#}");
        std::process::exit(1);
    }
}

fn main() {
    if let Err(e) = jsonedit::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

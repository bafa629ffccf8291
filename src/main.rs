fn main() {
    promptforge::app::cli::run();
}

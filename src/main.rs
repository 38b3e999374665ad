fn main() {
    tailwind_cli::app::cli::run();
}

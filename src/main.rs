fn main() {
    sxcu_setup::app::cli::run();
}

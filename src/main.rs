fn main() {
    pkgprobe::app::cli::run();
}

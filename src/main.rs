fn main() {
    pkgviz::cli::run();
}

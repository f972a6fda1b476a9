fn main() {
    assetgen::app::cli::run();
}

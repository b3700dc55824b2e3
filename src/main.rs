fn main() {
    uglify::run_cli();
}

fn main() {
    wellness_lib::run()
}

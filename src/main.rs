fn main() {
    crowdscope::run();
}

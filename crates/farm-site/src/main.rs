fn main() {
    farm_site::start();
}

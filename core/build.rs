fn main() {
    uniffi::generate_scaffolding("src/fuellog.udl").unwrap();
}

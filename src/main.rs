fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    newton_explorer::newton_controller()
}

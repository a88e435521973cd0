use ataxx_engine::logging::init_logging;
use ataxx_engine::text::console::run_stdio_loop;

fn main() -> std::io::Result<()> {
    init_logging();
    run_stdio_loop()
}

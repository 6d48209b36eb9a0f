fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!("Usage: okto <rom.ch8> [cpu_hz]");
        std::process::exit(1);
    };
    let cpu_hz = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(hz) => hz,
            Err(_) => {
                eprintln!("Invalid instruction rate '{}', expected a number", raw);
                std::process::exit(1);
            }
        },
        None => okto_core::DEFAULT_CPU_HZ,
    };

    log::info!("Playing ROM path: '{}' at {} Hz", rom_path, cpu_hz);
    let rom = std::fs::read(&rom_path).expect("Failed to read ROM file");

    okto::run(&rom, cpu_hz).unwrap();
}

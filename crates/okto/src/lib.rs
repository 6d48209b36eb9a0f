use anyhow::Result;
use okto_common::app::App;
use okto_core::EmulatorApp;
use okto_sdl2::{SdlContext, SdlInitInfo};

/// Boot the SDL frontend with `rom` loaded and the given instruction rate.
pub fn run(rom: &[u8], cpu_hz: u32) -> Result<()> {
    let mut app = EmulatorApp::default();
    app.emulator.load_rom(rom)?;
    app.emulator.set_cpu_hz(cpu_hz);

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)
}

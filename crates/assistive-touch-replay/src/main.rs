//! Replay a gesture script and print every reported frame as a JSON line.

#[cfg(feature = "native")]
fn main() -> std::process::ExitCode {
    use assistive_touch_replay::{FrameRecord, Script, replay};
    use std::process::ExitCode;

    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: assistive-touch-replay <script.json>");
        return ExitCode::from(2);
    };
    log::info!("Replaying {}", path);

    let result = match Script::load(&path).and_then(|script| replay(&script)) {
        Ok(result) => result,
        Err(err) => {
            log::error!("Replay failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    for frame in result.frames {
        match serde_json::to_string(&FrameRecord::from(frame)) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                log::error!("Failed to encode frame: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}

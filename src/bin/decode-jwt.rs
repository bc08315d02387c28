use std::io::{Write, stdout};

use jwt_inspect::{InspectError, logger::setup_logger, run};

fn main() -> anyhow::Result<()> {
    setup_logger();
    log::debug!(
        "{} v{} started",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let mut out = stdout().lock();
    let res = run(std::env::args_os(), &mut out);
    out.flush()?;

    match res {
        Ok(()) => Ok(()),
        Err(e @ InspectError::Usage { .. }) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            log::debug!("[main] failed with code {:?} ({})", e.code(), e.code() as i32);
            eprintln!("\nError: {e}");
            if e.is_segment_error() {
                eprintln!("Please ensure the JWT string is correct.");
            }
            std::process::exit(1);
        }
    }
}

use std::io;

use cosmian_console_logger::{debug, error, global_logger, info, special, Severity};

/// Render one record per level, then the color palettes.
///
/// Colors follow `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`:
///
/// ```bash
/// CLICOLOR_FORCE=1 cargo run -p cosmian_console_logger | less -R
/// ```
fn main() {
    let logger = global_logger();

    debug!("This is a DEBUG message");
    info!("This is an INFO message with an argument: {}", 42);
    special!("This is a SPECIAL message");

    logger.set_special_slug("audit");
    special!(user = "admin", action = "login"; "The special slug is now {:?}", logger.slug(Severity::Special));

    let err = io::Error::new(io::ErrorKind::NotFound, "configuration file not found");
    logger.error_with_error("This is an ERROR message", &err);
    error!(code = 404, path = "/kmip"; "This is an ERROR message with values");

    logger.color_swatch();
}

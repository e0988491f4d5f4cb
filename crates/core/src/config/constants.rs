//! Constants for navorder

use std::path::PathBuf;
use std::sync::OnceLock;

/// Full path of the executable file
pub static EXECUTABLE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Property holding the navigation position of a resource
pub const NAV_POS_PROPERTY: &str = "NavPos";

/// Property holding the navigation label of a resource
pub const NAV_TEXT_PROPERTY: &str = "NavText";

/// Localizer key for the "first element" sentinel label
pub const FIRST_ELEMENT_KEY: &str = "input.firstelement";

/// Localizer key for the "last element" sentinel label
pub const LAST_ELEMENT_KEY: &str = "input.lastelement";

/// Reserved key text of the FIRST sentinel
pub const FIRST_KEY: &str = "FIRST";

/// Reserved key text of the LAST sentinel
pub const LAST_KEY: &str = "LAST";

/// UI token meaning "keep the current position"
pub const NO_CHANGE_KEY: &str = "NOCHANGE";

/// Default config file name
pub const CONFIG_FILE: &str = "navorder.json";

/// Default locale for sentinel labels
pub const DEFAULT_LOCALE: &str = "en";

pub fn init_constants() -> std::io::Result<()> {
    let exe_path = std::env::current_exe()?;
    // A second call keeps the first value.
    let _ = EXECUTABLE_PATH.set(exe_path);
    Ok(())
}

//! JavaFX runtime discovery.
//!
//! - [`locator`] finds SDK files under the known JAVA_HOME layouts
//! - [`properties`] reads the runtime version from `javafx.properties`

pub mod locator;
pub mod properties;

pub use locator::{ANT_JAR, JavaHome, PROPERTIES_FILE, RUNTIME_JAR, locate};
pub use properties::{RuntimeProperties, VERSION_KEY, read_version};

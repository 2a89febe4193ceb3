//! `install`: put the JDK's JavaFX jars into a local repository.

use crate::bundler::{ArtifactInstaller, JavaHome, LocalRepository};
use crate::cli::{RuntimeConfig, args::InstallArgs};
use crate::error::Result;

/// Installs `jfxrt.jar` and `ant-javafx.jar` from `args.java_home`.
///
/// Prints the dependency declaration to paste into a project on success.
pub async fn execute(args: &InstallArgs, config: &RuntimeConfig) -> Result<i32> {
    let java_home = JavaHome::new(&args.java_home)?;
    let repository = match &args.repository {
        Some(root) => LocalRepository::new(root),
        None => LocalRepository::new(LocalRepository::default_location()?),
    };

    config.section("Installing JavaFX runtime")?;
    config.verbose_println(&format!("JAVA_HOME:  {}", java_home.root().display()))?;
    config.verbose_println(&format!("Repository: {}", repository.root().display()))?;

    let installed = ArtifactInstaller::new(&repository)
        .install_runtime(&java_home)
        .await?;

    for (coordinate, path) in &installed.artifacts {
        config.indent(&format!("{} -> {}", coordinate, path.display()))?;
    }
    config.success(&format!("Installed JavaFX {}", installed.version))?;
    config.output().println(
        "\nAdd the following dependency to your project to use the installed runtime:\n",
    )?;
    config.output().println(&installed.dependency_declaration())?;

    Ok(0)
}

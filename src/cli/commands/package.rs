//! `package`: build the executable jar and native bundles of a project.

use crate::bundler::{AttachmentManifest, JavaPackager, Packager};
use crate::cli::{RuntimeConfig, args::PackageArgs};
use crate::error::{BundlerError, CliError, Result};
use crate::metadata;
use path_absolutize::Absolutize;
use std::time::Duration;

/// Runs every package phase for the project described by `args.config` and
/// writes the attachment manifest.
pub async fn execute(args: &PackageArgs, config: &RuntimeConfig) -> Result<i32> {
    let config_path = args.config.absolutize()?.into_owned();
    let base_dir = config_path.parent().ok_or_else(|| {
        BundlerError::Cli(CliError::InvalidArguments {
            reason: format!("Invalid config path: {}", config_path.display()),
        })
    })?;

    let settings = metadata::load_config(&config_path)?.into_settings(base_dir, args.bundle_type)?;
    let project = settings.project();

    config.section(&format!("Packaging {}", project.final_name))?;
    config.verbose_println(&format!("Artifact:    {}", project.artifact.display()))?;
    config.verbose_println(&format!("Bundle type: {}", settings.bundle_type()))?;

    let mut engine = JavaPackager::locate(args.java_home.as_deref())?;
    if let Some(seconds) = args.timeout {
        engine = engine.with_timeout(Duration::from_secs(seconds));
    }
    if config.output().is_quiet() {
        engine = engine.quiet();
    }
    config.verbose_println(&format!("Packager:    {}", engine.tool().display()))?;

    let mut manifest = AttachmentManifest::new(project);
    config.progress("Creating executable jar and native bundles")?;
    let outcome = Packager::new(&engine, settings).package(&mut manifest).await?;
    manifest.save().await?;

    config.indent(&format!("jar: {}", outcome.packaged_jar.display()))?;
    for entry in manifest.entries() {
        config.indent(&format!(
            "{}/{}: {} ({} bytes)",
            entry.artifact_type,
            entry.classifier,
            entry.path.display(),
            entry.size
        ))?;
    }
    if outcome.attachments.is_empty() {
        config.warn("No native bundles were attached")?;
    }
    config.success(&format!(
        "Attached {} artifact(s), manifest at {}",
        outcome.attachments.len(),
        manifest.path().display()
    ))?;

    Ok(0)
}

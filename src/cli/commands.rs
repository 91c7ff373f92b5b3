//! Command dispatcher: one handler per subcommand

use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Commands::Install { package, tags } => cmd_install(container, package, tags),
        Commands::Tag { package, tags } => cmd_tag(container, package, tags),
        Commands::List { tag } => cmd_list(container, tag),
        Commands::Tags { package } => cmd_tags(container, package),
        Commands::Untag { package, tag } => cmd_untag(container, package, tag),
        Commands::Remove { package } => cmd_remove(container, package),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cmd_config_show(container),
            ConfigCommands::Path => cmd_config_path(container),
            ConfigCommands::Init { force } => cmd_config_init(container, *force),
        },
    }
}

/// Text shown by `tags`: comma-separated tags, or a note that there are none.
pub fn format_tags(package: &str, tags: Option<&[String]>) -> String {
    match tags {
        Some(tags) => tags.join(", "),
        None => format!("Nessun tag per {package}."),
    }
}

#[instrument(skip(container))]
fn cmd_install(container: &ServiceContainer, package: &str, tags: &[String]) -> CliResult<()> {
    container.tag_service().install(package, tags)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tag(container: &ServiceContainer, package: &str, tags: &[String]) -> CliResult<()> {
    match container.tag_service().tag(package, tags) {
        Ok(_) => Ok(()),
        Err(ApplicationError::Domain(e @ DomainError::NotInstalled(_))) => {
            output::info(&e);
            Err(CliError::Reported(exitcode::NOT_INSTALLED))
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(container))]
fn cmd_list(container: &ServiceContainer, tag: &str) -> CliResult<()> {
    let packages = container.tag_service().list(tag)?;
    debug!("{} packages tagged {tag}", packages.len());
    for package in packages {
        output::info(&package);
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tags(container: &ServiceContainer, package: &str) -> CliResult<()> {
    let tags = container.tag_service().tags(package)?;
    output::info(&format_tags(package, tags.as_deref()));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_untag(container: &ServiceContainer, package: &str, tag: &str) -> CliResult<()> {
    let changed = container.tag_service().untag(package, tag)?;
    debug!("untag {package} {tag}: changed={changed}");
    Ok(())
}

#[instrument(skip(container))]
fn cmd_remove(container: &ServiceContainer, package: &str) -> CliResult<()> {
    let changed = container.tag_service().remove(package)?;
    debug!("remove {package}: changed={changed}");
    Ok(())
}

fn cmd_config_show(container: &ServiceContainer) -> CliResult<()> {
    output::info(&container.settings.to_toml()?);
    Ok(())
}

fn cmd_config_path(container: &ServiceContainer) -> CliResult<()> {
    let config = global_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unavailable)".to_string());
    output::labelled("config", &config);
    output::labelled("database", &container.settings.database_path.display());
    Ok(())
}

#[instrument(skip(container))]
fn cmd_config_init(container: &ServiceContainer, force: bool) -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))?;

    if container.fs.exists(&path) && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    container
        .fs
        .ensure_parent(&path)
        .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
    container
        .fs
        .write(&path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;

    output::success(&format!("created {}", path.display()));
    Ok(())
}

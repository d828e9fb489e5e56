//! The generation run: `backstrap <NAME>`.
//!
//! Responsibility: translate CLI arguments and config into a
//! `GenerationRequest` and adapters, call the core scaffold service, and
//! display progress and results. No business logic lives here.

use std::io;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use backstrap_adapters::{
    CommandInstaller, DirectoryTemplate, EmbeddedTemplate, LocalFilesystem, SkipInstaller,
};
use backstrap_core::{
    application::{
        ScaffoldService,
        ports::{PackageInstaller, TemplateSource},
    },
    domain::{GenerationPlan, GenerationReport, GenerationRequest, ProjectName, Stage},
    error::ScaffoldError,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a generation run.
///
/// Dispatch sequence:
/// 1. Validate the project name (missing or invalid → usage error)
/// 2. Resolve the template source and installer from flags + config
/// 3. `--dry-run`: print the plan and stop
/// 4. Generate via `ScaffoldService`, reporting each stage
/// 5. Print the success banner with next steps
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Project name
    let name = parse_name(args.name.as_deref())?;

    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to read the current directory".into(),
        source: e,
    })?;
    let request = GenerationRequest::new(name, cwd);

    // 2. Adapters
    let template_dir = args.template.clone().or(config.template.path.clone());
    let skip_install = args.skip_install || config.install.skip;
    let service = ScaffoldService::new(
        build_source(template_dir),
        Box::new(LocalFilesystem::new()),
        build_installer(&config, skip_install),
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&request)?;
        return show_plan(&plan, &output);
    }

    // 4. Generate
    info!(destination = %request.destination().display(), "Generation started");
    debug!(
        format = ?output.format(),
        color = output.supports_color(),
        quiet = output.is_quiet(),
        "Output configured"
    );

    let mut write_error: Option<io::Error> = None;
    let report = service.generate(&request, |stage| {
        debug!(%stage, "Stage started");
        if let Err(e) = announce(stage, &output) {
            write_error.get_or_insert(e);
        }
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    info!(
        files = report.files_written,
        package = %report.package_name,
        "Generation completed"
    );

    // 5. Success + next steps
    show_success(&request, &report, &config, &output)
}

fn parse_name(raw: Option<&str>) -> CliResult<ProjectName> {
    let raw = raw.ok_or_else(|| ScaffoldError::usage("Please provide a project name"))?;
    Ok(ProjectName::parse(raw).map_err(ScaffoldError::from)?)
}

fn build_source(template_dir: Option<PathBuf>) -> Box<dyn TemplateSource> {
    match template_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template directory");
            Box::new(DirectoryTemplate::new(dir))
        }
        None => Box::new(EmbeddedTemplate::new()),
    }
}

fn build_installer(config: &AppConfig, skip: bool) -> Box<dyn PackageInstaller> {
    let command = CommandInstaller::new(&config.install.program, config.install.args.clone());
    if skip {
        Box::new(SkipInstaller::new(command.dev_command()))
    } else {
        Box::new(command)
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn announce(stage: &Stage, out: &OutputManager) -> io::Result<()> {
    match stage {
        Stage::Copying { .. } => {
            out.info("\u{1f680} Creating backend project...")?; // 🚀
            out.print("")
        }
        Stage::PatchingManifest { .. } => Ok(()),
        Stage::Installing { .. } => {
            out.warning("\u{1f4e6} Installing dependencies...")?; // 📦
            out.print("")
        }
    }
}

fn show_success(
    request: &GenerationRequest,
    report: &GenerationReport,
    config: &AppConfig,
    out: &OutputManager,
) -> CliResult<()> {
    out.print("")?;
    out.success("\u{2705} Backend ready to go!")?; // ✅
    out.print("")?;
    out.hint(&format!("\u{1f449} cd {}", request.name))?; // 👉
    if report.install_command.is_none() {
        let install =
            CommandInstaller::new(&config.install.program, config.install.args.clone());
        out.hint(&format!("\u{1f449} {}", install.command_line()))?;
    }
    out.hint(&format!("\u{1f449} {}", report.dev_command))?;
    out.print("")?;
    Ok(())
}

fn show_plan(plan: &GenerationPlan, out: &OutputManager) -> CliResult<()> {
    out.header(&format!("Dry run: would create {}", plan.destination.display()))?;
    out.print(&format!("  Template:     {}", plan.template))?;
    out.print(&format!(
        "  Contents:     {} files, {} directories",
        plan.files, plan.directories
    ))?;
    out.print(&format!("  Package name: {}", plan.package_name))?;
    out.print(&format!(
        "  Install:      {}",
        plan.install_command.as_deref().unwrap_or("skipped")
    ))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

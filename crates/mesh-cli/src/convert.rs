//! The OBJ to VTK conversion run.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use mesh_convert::{
    ConvertParams, MeshError, MeshFormat, MeshSummary, PolygonMesh, TriangulationReport,
    default_output_path,
};
use serde::Serialize;
use tracing::debug;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct ConvertResult {
    input: String,
    output: String,
    params: ConvertParams,
    before: MeshSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    triangulation: Option<TriangulationReport>,
    after: MeshSummary,
}

pub fn run(cli: &Cli) -> Result<()> {
    let input = cli.input.as_path();
    if MeshFormat::from_path(input) != Some(MeshFormat::Obj) {
        let extension = input
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
        return Err(MeshError::unsupported_format(extension).into());
    }

    let params = resolve_params(cli)?;
    let output_path = match &cli.output {
        Some(path) => path.clone(),
        None => default_output_path(input)?,
    };
    let source_name = source_name(input);
    debug!(?params, output = ?output_path, "Resolved conversion settings");

    if cli.clear && cli.format == OutputFormat::Text && !cli.quiet {
        clear_terminal();
    }

    output::info(&format!("Reading {} ...", source_name), cli.format, cli.quiet);
    let mut mesh = PolygonMesh::load(input, &params)
        .with_context(|| format!("Failed to load mesh from {:?}", input))?;
    let before = mesh.summary();
    output::block(&before.to_string(), cli.format, cli.quiet);

    let triangulation = if params.triangulate {
        output::info("Triangulating ...", cli.format, cli.quiet);
        let report = mesh.triangulate().context("Failed to triangulate mesh")?;
        output::info(
            &format!(
                "Split {} polygons into {} triangles",
                report.faces_split, report.triangles_created
            ),
            cli.format,
            cli.quiet,
        );
        Some(report)
    } else {
        None
    };
    let after = mesh.summary();
    if triangulation.is_some() {
        output::block(&after.to_string(), cli.format, cli.quiet);
    }

    output::info("Writing VTK ...", cli.format, cli.quiet);
    mesh.save(&output_path, &source_name)
        .with_context(|| format!("Failed to save mesh to {:?}", output_path))?;

    let result = ConvertResult {
        input: input.display().to_string(),
        output: output_path.display().to_string(),
        params,
        before,
        triangulation,
        after,
    };

    match cli.format {
        OutputFormat::Json => output::print(&result, cli.format, cli.quiet)?,
        OutputFormat::Text => output::success(
            &format!("{} has been saved", output_path.display()),
            cli.format,
            cli.quiet,
        ),
    }

    Ok(())
}

/// Parameters from `--config` (or defaults), then overridden by flags.
fn resolve_params(cli: &Cli) -> Result<ConvertParams> {
    let mut params = match &cli.config {
        Some(path) => ConvertParams::from_toml_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => ConvertParams::default(),
    };
    if cli.permissive {
        params.strict_indices = false;
    }
    if cli.no_triangulate {
        params.triangulate = false;
    }
    Ok(params)
}

fn source_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

fn clear_terminal() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = std::io::stdout().flush();
}

//! Filesystem side of quickstart: layout, conflict checks and generation

pub mod layout;
pub mod writer;

use crate::session::{Answers, Derived, Extension};
use crate::templates::{GeneratedFile, TemplateContext, TemplateRenderer};
use anyhow::Result;
use layout::ProjectLayout;
use std::path::PathBuf;

pub use layout::{has_existing_conf, has_existing_master};

/// What a generation run produced
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub layout: ProjectLayout,
    pub master_file: PathBuf,
    /// Written files, in write order
    pub files: Vec<PathBuf>,
    /// A Makefile or make.bat was written
    pub has_make: bool,
}

/// Create the directory tree and write every requested file.
///
/// Writes are not transactional; a failure part way leaves what was already
/// written in place.
pub async fn generate(answers: &Answers, derived: &Derived) -> Result<GeneratedProject> {
    let renderer = TemplateRenderer::new()?;
    let layout = ProjectLayout::new(answers);
    let context = TemplateContext::new(answers, derived, &layout);

    writer::create_directories(&layout).await?;

    let mut outputs = vec![
        (
            layout.conf_path(),
            renderer.render_conf(&context, answers.has_extension(Extension::Intersphinx))?,
        ),
        (
            layout.master_path(answers),
            renderer.render(GeneratedFile::Master, &context)?,
        ),
    ];
    if answers.makefile {
        outputs.push((
            layout.makefile_path(),
            renderer.render(GeneratedFile::Makefile, &context)?,
        ));
    }
    if answers.batchfile {
        outputs.push((
            layout.batchfile_path(),
            renderer.render(GeneratedFile::Batchfile, &context)?,
        ));
    }

    let mut files = Vec::with_capacity(outputs.len());
    for (path, text) in outputs {
        writer::write_file(&path, &text).await?;
        files.push(path);
    }

    Ok(GeneratedProject {
        master_file: layout.master_path(answers),
        layout,
        files,
        has_make: answers.makefile || answers.batchfile,
    })
}

/// Instructions printed after a successful run
pub fn next_steps(project: &GeneratedProject) -> Vec<String> {
    let mut steps = vec![format!(
        "Populate your master file {} and create other documentation source files",
        project.master_file.display()
    )];

    if project.has_make {
        steps.push("Use the Makefile to build the docs: make builder".to_string());
    } else {
        steps.push(format!(
            "Use the sphinx-build command to build the docs: sphinx-build -b builder {} {}",
            project.layout.srcdir.display(),
            project.layout.builddir.display()
        ));
    }

    steps.push(
        "\"builder\" is one of the supported builders, e.g. html, latex or linkcheck".to_string(),
    );
    steps
}

//! Rendering of the generated project files
//!
//! This module provides:
//! - The embedded Handlebars templates for `conf.py`, the master document,
//!   the Makefile and the Windows command file
//! - [`TemplateContext`], the fixed set of values every template may use
//! - Text escaping helpers for TeX and Python string literals
//!
//! Templates are rendered in strict mode: a placeholder without a matching
//! context field is a render error, never an empty string.

pub mod escape;

use crate::error::{QuickstartError, Result};
use crate::project::layout::ProjectLayout;
use crate::session::{Answers, Derived};
use handlebars::Handlebars;
use serde::Serialize;

const CONF_TEMPLATE: &str = include_str!("files/conf.py.hbs");
const MASTER_TEMPLATE: &str = include_str!("files/master.rst.hbs");
const MAKEFILE_TEMPLATE: &str = include_str!("files/Makefile.hbs");
const BATCHFILE_TEMPLATE: &str = include_str!("files/make.bat.hbs");

/// Appended to `conf.py` when intersphinx is enabled
pub const INTERSPHINX_CONFIG: &str = include_str!("files/intersphinx.py");

/// The files quickstart knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedFile {
    Conf,
    Master,
    Makefile,
    Batchfile,
}

impl GeneratedFile {
    pub const ALL: [GeneratedFile; 4] = [
        GeneratedFile::Conf,
        GeneratedFile::Master,
        GeneratedFile::Makefile,
        GeneratedFile::Batchfile,
    ];

    pub fn template_name(&self) -> &'static str {
        match self {
            GeneratedFile::Conf => "conf.py",
            GeneratedFile::Master => "master",
            GeneratedFile::Makefile => "Makefile",
            GeneratedFile::Batchfile => "make.bat",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            GeneratedFile::Conf => CONF_TEMPLATE,
            GeneratedFile::Master => MASTER_TEMPLATE,
            GeneratedFile::Makefile => MAKEFILE_TEMPLATE,
            GeneratedFile::Batchfile => BATCHFILE_TEMPLATE,
        }
    }
}

/// Values substituted into the templates
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    pub project: &'a str,
    pub now: &'a str,
    pub project_fn: &'a str,
    pub underline: &'a str,
    pub extensions: &'a str,
    pub dot: &'a str,
    pub suffix: &'a str,
    pub master_str: &'a str,
    pub project_str: &'a str,
    pub copyright_str: &'a str,
    pub version_str: &'a str,
    pub release_str: &'a str,
    pub project_doc_texescaped_str: &'a str,
    pub author_texescaped_str: &'a str,
    pub exclude_trees: &'a str,
    pub rsrcdir: &'a str,
    pub rbuilddir: &'a str,
    /// Literal backslash for spots where one directly precedes a placeholder
    pub win_sep: &'static str,
}

impl<'a> TemplateContext<'a> {
    pub fn new(answers: &'a Answers, derived: &'a Derived, layout: &'a ProjectLayout) -> Self {
        Self {
            project: &answers.project,
            now: &derived.now,
            project_fn: &derived.project_fn,
            underline: &derived.underline,
            extensions: &derived.extensions,
            dot: &answers.dot,
            suffix: &answers.suffix,
            master_str: &derived.master_str,
            project_str: &derived.project_str,
            copyright_str: &derived.copyright_str,
            version_str: &derived.version_str,
            release_str: &derived.release_str,
            project_doc_texescaped_str: &derived.project_doc_texescaped_str,
            author_texescaped_str: &derived.author_texescaped_str,
            exclude_trees: &layout.exclude_trees,
            rsrcdir: &layout.rsrcdir,
            rbuilddir: &layout.rbuilddir,
            win_sep: "\\",
        }
    }
}

/// Holds the parsed templates for one run
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Parse every bundled template up front
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for file in GeneratedFile::ALL {
            let name = file.template_name();
            registry
                .register_template_string(name, file.source())
                .map_err(|e| QuickstartError::Template {
                    name,
                    source: Box::new(e),
                })?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, file: GeneratedFile, context: &T) -> Result<String> {
        let name = file.template_name();
        self.registry
            .render(name, context)
            .map_err(|e| QuickstartError::Render {
                name,
                source: Box::new(e),
            })
    }

    /// Render `conf.py`, appending the intersphinx mapping when requested
    pub fn render_conf<T: Serialize>(&self, context: &T, intersphinx: bool) -> Result<String> {
        let mut text = self.render(GeneratedFile::Conf, context)?;
        if intersphinx {
            text.push_str(INTERSPHINX_CONFIG);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::demo_answers;
    use crate::session::Extension;
    use chrono::{TimeZone, Utc};

    fn render_all(answers: &Answers) -> Vec<(GeneratedFile, String)> {
        let now = Utc.with_ymd_and_hms(2009, 3, 7, 14, 5, 9).unwrap();
        let derived = Derived::compute(answers, &now);
        let layout = ProjectLayout::new(answers);
        let context = TemplateContext::new(answers, &derived, &layout);
        let renderer = TemplateRenderer::new().unwrap();

        GeneratedFile::ALL
            .iter()
            .map(|&file| (file, renderer.render(file, &context).unwrap()))
            .collect()
    }

    fn rendered(answers: &Answers, file: GeneratedFile) -> String {
        render_all(answers)
            .into_iter()
            .find(|(f, _)| *f == file)
            .map(|(_, text)| text)
            .unwrap()
    }

    #[test]
    fn test_every_template_renders_with_full_context() {
        let mut answers = demo_answers();
        answers.sep = true;
        answers.extensions = Extension::ALL.to_vec();
        for (file, text) in render_all(&answers) {
            assert!(!text.is_empty(), "{:?}", file);
            assert!(!text.contains("{{"), "unrendered placeholder in {:?}", file);
        }
    }

    #[test]
    fn test_missing_key_is_a_render_error() {
        #[derive(Serialize)]
        struct Partial {
            project: &'static str,
        }

        let renderer = TemplateRenderer::new().unwrap();
        let err = renderer
            .render(GeneratedFile::Master, &Partial { project: "Demo" })
            .unwrap_err();
        assert!(matches!(err, QuickstartError::Render { name: "master", .. }));
    }

    #[test]
    fn test_master_heading_underline() {
        let mut answers = demo_answers();
        answers.project = "My Project".to_string();
        let text = rendered(&answers, GeneratedFile::Master);

        let lines: Vec<&str> = text.lines().collect();
        let title = lines
            .iter()
            .position(|l| *l == "Welcome to My Project's documentation!")
            .unwrap();
        assert_eq!(lines[title + 1].len(), lines[title].len());
        assert!(lines[title + 1].chars().all(|c| c == '='));
    }

    #[test]
    fn test_conf_values() {
        let mut answers = demo_answers();
        answers.project = "Bob's Docs".to_string();
        answers.extensions = vec![Extension::Autodoc, Extension::Todo];
        let text = rendered(&answers, GeneratedFile::Conf);

        assert!(text.contains("# Bob's Docs documentation build configuration file"));
        assert!(text.contains("sphinx-quickstart on Sat Mar  7 14:05:09 2009."));
        assert!(text.contains("extensions = ['sphinx.ext.autodoc', 'sphinx.ext.todo']"));
        assert!(text.contains("templates_path = ['_templates']"));
        assert!(text.contains("html_static_path = ['_static']"));
        assert!(text.contains("source_suffix = '.rst'"));
        assert!(text.contains("master_doc = 'index'"));
        assert!(text.contains(r"project = u'Bob\'s Docs'"));
        assert!(text.contains("copyright = u'2009, A'"));
        assert!(text.contains("version = '1.0'"));
        assert!(text.contains("exclude_trees = ['_build']"));
        assert!(text.contains("htmlhelp_basename = 'BobsDocsdoc'"));
        assert!(text.contains("('index', 'BobsDocs.tex', u'Bob\\'s Docs Documentation',"));
        assert!(text.contains("#today_fmt = '%B %d, %Y'"));
    }

    #[test]
    fn test_conf_with_separate_source_has_no_excludes() {
        let mut answers = demo_answers();
        answers.sep = true;
        let text = rendered(&answers, GeneratedFile::Conf);
        assert!(text.contains("exclude_trees = []"));
    }

    #[test]
    fn test_intersphinx_is_appended() {
        let answers = demo_answers();
        let now = Utc::now();
        let derived = Derived::compute(&answers, &now);
        let layout = ProjectLayout::new(&answers);
        let context = TemplateContext::new(&answers, &derived, &layout);
        let renderer = TemplateRenderer::new().unwrap();

        let without = renderer.render_conf(&context, false).unwrap();
        let with = renderer.render_conf(&context, true).unwrap();
        assert!(!without.contains("intersphinx_mapping"));
        assert!(with.ends_with("intersphinx_mapping = {'http://docs.python.org/': None}\n"));
    }

    #[test]
    fn test_makefile_and_batchfile_paths() {
        let mut answers = demo_answers();
        answers.project = "Demo Project".to_string();

        let makefile = rendered(&answers, GeneratedFile::Makefile);
        assert!(makefile.contains("BUILDDIR      = _build\n"));
        assert!(makefile.contains("$(SPHINXOPTS) .\n"));
        assert!(makefile.contains("\t$(SPHINXBUILD) -b html $(ALLSPHINXOPTS) $(BUILDDIR)/html\n"));
        assert!(makefile.contains("$(BUILDDIR)/qthelp/DemoProject.qhcp"));

        let batch = rendered(&answers, GeneratedFile::Batchfile);
        assert!(batch.contains("set BUILDDIR=_build\n"));
        assert!(batch.contains("set ALLSPHINXOPTS=-d %BUILDDIR%/doctrees %SPHINXOPTS% .\n"));
        assert!(batch.contains(r"%BUILDDIR%\qthelp\DemoProject.qhcp"));
        assert!(batch.contains("\tfor /d %%i in (%BUILDDIR%\\*) do rmdir /q /s %%i\n"));

        answers.sep = true;
        let makefile = rendered(&answers, GeneratedFile::Makefile);
        assert!(makefile.contains("BUILDDIR      = build\n"));
        assert!(makefile.contains("$(SPHINXOPTS) source\n"));
    }
}

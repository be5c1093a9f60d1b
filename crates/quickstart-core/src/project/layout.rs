//! Where generated files and directories go

use crate::session::Answers;
use crate::templates::escape::py_string_escape;
use std::path::{Path, PathBuf};

pub const CONF_FILE: &str = "conf.py";

/// Name of the source dir when source and build are separated
pub const SOURCE_DIR: &str = "source";
pub const BUILD_DIR: &str = "build";

/// Directory layout computed from the answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    /// Holds `conf.py` and the master document
    pub srcdir: PathBuf,
    pub builddir: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Python list body for `exclude_trees` in `conf.py`
    pub exclude_trees: String,
    /// Source dir relative to the root, for the Makefile and make.bat
    pub rsrcdir: String,
    /// Build dir relative to the root, for the Makefile and make.bat
    pub rbuilddir: String,
}

impl ProjectLayout {
    pub fn new(answers: &Answers) -> Self {
        let root = answers.path.clone();
        let dot = &answers.dot;

        let (srcdir, builddir, exclude_trees, rsrcdir, rbuilddir) = if answers.sep {
            (
                root.join(SOURCE_DIR),
                root.join(BUILD_DIR),
                String::new(),
                SOURCE_DIR.to_string(),
                BUILD_DIR.to_string(),
            )
        } else {
            let build_name = format!("{}build", dot);
            (
                root.clone(),
                root.join(&build_name),
                format!("'{}'", py_string_escape(&build_name)),
                ".".to_string(),
                build_name,
            )
        };

        Self {
            templates_dir: srcdir.join(format!("{}templates", dot)),
            static_dir: srcdir.join(format!("{}static", dot)),
            root,
            srcdir,
            builddir,
            exclude_trees,
            rsrcdir,
            rbuilddir,
        }
    }

    /// Directories to create, parents first
    pub fn directories(&self) -> [&Path; 5] {
        [
            &self.root,
            &self.srcdir,
            &self.builddir,
            &self.templates_dir,
            &self.static_dir,
        ]
    }

    pub fn conf_path(&self) -> PathBuf {
        self.srcdir.join(CONF_FILE)
    }

    pub fn master_path(&self, answers: &Answers) -> PathBuf {
        self.srcdir.join(answers.master_file_name())
    }

    pub fn makefile_path(&self) -> PathBuf {
        self.root.join("Makefile")
    }

    pub fn batchfile_path(&self) -> PathBuf {
        self.root.join("make.bat")
    }
}

/// A `conf.py` already exists in the root or its `source` dir
pub fn has_existing_conf(root: &Path) -> bool {
    exists_in_root_or_source(root, CONF_FILE)
}

/// The master document already exists in the root or its `source` dir
pub fn has_existing_master(root: &Path, file_name: &str) -> bool {
    exists_in_root_or_source(root, file_name)
}

fn exists_in_root_or_source(root: &Path, file_name: &str) -> bool {
    root.join(file_name).is_file() || root.join(SOURCE_DIR).join(file_name).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::demo_answers;

    #[test]
    fn test_layout_without_separation() {
        let mut answers = demo_answers();
        answers.path = PathBuf::from("docs");
        let layout = ProjectLayout::new(&answers);

        assert_eq!(layout.srcdir, PathBuf::from("docs"));
        assert_eq!(layout.builddir, PathBuf::from("docs/_build"));
        assert_eq!(layout.templates_dir, PathBuf::from("docs/_templates"));
        assert_eq!(layout.static_dir, PathBuf::from("docs/_static"));
        assert_eq!(layout.exclude_trees, "'_build'");
        assert_eq!(layout.rsrcdir, ".");
        assert_eq!(layout.rbuilddir, "_build");
        assert_eq!(layout.conf_path(), PathBuf::from("docs/conf.py"));
        assert_eq!(layout.master_path(&answers), PathBuf::from("docs/index.rst"));
    }

    #[test]
    fn test_layout_with_separation_and_prefix() {
        let mut answers = demo_answers();
        answers.path = PathBuf::from("docs");
        answers.sep = true;
        answers.dot = ".".to_string();
        let layout = ProjectLayout::new(&answers);

        assert_eq!(layout.srcdir, PathBuf::from("docs/source"));
        assert_eq!(layout.builddir, PathBuf::from("docs/build"));
        assert_eq!(layout.templates_dir, PathBuf::from("docs/source/.templates"));
        assert_eq!(layout.static_dir, PathBuf::from("docs/source/.static"));
        assert_eq!(layout.exclude_trees, "");
        assert_eq!(layout.rsrcdir, "source");
        assert_eq!(layout.rbuilddir, "build");
        assert_eq!(layout.makefile_path(), PathBuf::from("docs/Makefile"));
    }

    #[test]
    fn test_existing_conf_detection() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!has_existing_conf(dir.path()));

        std::fs::create_dir(dir.path().join("source")).unwrap();
        std::fs::write(dir.path().join("source").join("conf.py"), "").unwrap();
        assert!(has_existing_conf(dir.path()));
    }

    #[test]
    fn test_existing_master_detection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.rst"), "").unwrap();
        assert!(has_existing_master(dir.path(), "index.rst"));
        assert!(!has_existing_master(dir.path(), "index.txt"));
    }
}

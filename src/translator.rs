use std::path::Path;

use once_cell::sync::Lazy;

use crate::paths::is_module_output;
use crate::rules::VocabularyTable;
use crate::vocabulary::{GENERAL, MODULE};

static GENERAL_TABLE: Lazy<VocabularyTable> =
    Lazy::new(|| VocabularyTable::compile(GENERAL).expect("general vocabulary regex"));

static MODULE_TABLE: Lazy<VocabularyTable> =
    Lazy::new(|| VocabularyTable::compile(MODULE).expect("module vocabulary regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// `module-info.java`: general vocabulary, then module vocabulary.
    Module,
}

impl Mode {
    pub fn for_output_path(path: &Path) -> Self {
        Self::from(is_module_output(path))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Module => "module",
        }
    }
}

impl From<bool> for Mode {
    fn from(module_mode: bool) -> Self {
        if module_mode {
            Self::Module
        } else {
            Self::Normal
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Translator<'a> {
    general: &'a VocabularyTable,
    module: &'a VocabularyTable,
}

impl Translator<'static> {
    pub fn standard() -> Self {
        Self {
            general: &GENERAL_TABLE,
            module: &MODULE_TABLE,
        }
    }
}

impl<'a> Translator<'a> {
    pub fn with_tables(general: &'a VocabularyTable, module: &'a VocabularyTable) -> Self {
        Self { general, module }
    }

    pub fn general(&self) -> &'a VocabularyTable {
        self.general
    }

    pub fn module(&self) -> &'a VocabularyTable {
        self.module
    }

    pub fn translate(&self, text: &str, mode: Mode) -> String {
        let out = self.general.apply(text);
        match mode {
            Mode::Normal => out,
            Mode::Module => self.module.apply(&out),
        }
    }
}

pub fn translate(text: &str, mode: Mode) -> String {
    Translator::standard().translate(text, mode)
}

pub fn compile_to_java(text: &str, module_mode: bool) -> String {
    translate(text, Mode::from(module_mode))
}

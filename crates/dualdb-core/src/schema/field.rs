use crate::driver::BackendKind;

/// Which backends a field is written to and read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Affinity {
    #[default]
    Both,
    RelationalOnly,
    DocumentOnly,
}

/// Static metadata for one model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The Rust field name
    pub name: &'static str,

    /// Column or document key, when it differs from `name`
    pub storage_name: Option<&'static str>,

    pub affinity: Affinity,

    /// Assigned by the backend; never written by inserts or updates.
    pub auto: bool,

    pub primary_key: bool,

    pub not_null: bool,

    /// Maximum length in characters for string values.
    pub max_length: Option<usize>,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str) -> FieldDescriptor {
        FieldDescriptor {
            name,
            storage_name: None,
            affinity: Affinity::Both,
            auto: false,
            primary_key: false,
            not_null: false,
            max_length: None,
        }
    }

    pub const fn storage_name(&self) -> &'static str {
        match self.storage_name {
            Some(name) => name,
            None => self.name,
        }
    }

    pub const fn column(mut self, storage_name: &'static str) -> Self {
        self.storage_name = Some(storage_name);
        self
    }

    pub const fn affinity(mut self, affinity: Affinity) -> Self {
        self.affinity = affinity;
        self
    }

    pub const fn auto(mut self) -> Self {
        self.auto = true;
        self
    }

    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn applies_to(&self, backend: BackendKind) -> bool {
        match self.affinity {
            Affinity::Both => true,
            Affinity::RelationalOnly => backend.is_relational(),
            Affinity::DocumentOnly => backend.is_document(),
        }
    }

    /// Fields written by insert and update on `backend`.
    pub fn is_writable(&self, backend: BackendKind) -> bool {
        !self.auto && self.applies_to(backend)
    }
}

use gqlforge_naming::ArtifactKind;

/// Explicit selection of artifact kinds to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtifactFlags {
    pub model: bool,
    pub object_type: bool,
    pub input: bool,
    pub filter: bool,
    pub sort: bool,
    pub resolver: bool,
}

impl ArtifactFlags {
    pub fn all() -> Self {
        Self {
            model: true,
            object_type: true,
            input: true,
            filter: true,
            sort: true,
            resolver: true,
        }
    }

    /// Flags used when reverse-engineering a database: always the model, and the
    /// GraphQL artifacts only when `graphql_files` is set.
    pub fn reverse(graphql_files: bool) -> Self {
        Self {
            model: true,
            object_type: graphql_files,
            input: graphql_files,
            filter: graphql_files,
            sort: graphql_files,
            resolver: graphql_files,
        }
    }

    /// True when any GraphQL-side artifact is explicitly selected.
    pub fn any_graphql(&self) -> bool {
        self.object_type || self.input || self.filter || self.sort || self.resolver
    }

    pub fn is_empty(&self) -> bool {
        !self.model && !self.any_graphql()
    }

    pub fn set(&mut self, kind: ArtifactKind) {
        match kind {
            ArtifactKind::Model => self.model = true,
            ArtifactKind::ObjectType => self.object_type = true,
            ArtifactKind::Filter => self.filter = true,
            ArtifactKind::Sort => self.sort = true,
            ArtifactKind::Input => self.input = true,
            ArtifactKind::Resolver => self.resolver = true,
        }
    }
}

impl FromIterator<ArtifactKind> for ArtifactFlags {
    fn from_iter<I: IntoIterator<Item = ArtifactKind>>(iter: I) -> Self {
        let mut flags = ArtifactFlags::default();
        for kind in iter {
            flags.set(kind);
        }
        flags
    }
}
